use crypto_pay::CryptoPayClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let token = std::env::var("CRYPTO_PAY_API_TOKEN")
        .expect("CRYPTO_PAY_API_TOKEN environment variable is required");

    let testnet = std::env::var("CRYPTO_PAY_TESTNET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let client = match if testnet {
        CryptoPayClient::testnet(token)
    } else {
        CryptoPayClient::new(token)
    } {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("Querying: {}\n", client.api_url());

    match client.get_me(false).await {
        Ok(me) => {
            println!("App identity:");
            println!("{}", serde_json::to_string_pretty(&me).unwrap_or_default());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    match client.get_balance().await {
        Ok(balance) => {
            println!("\nBalance:");
            println!(
                "{}",
                serde_json::to_string_pretty(&balance).unwrap_or_default()
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
