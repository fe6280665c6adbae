use std::io;

use decisiontelecom::{SmsAuth, SmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let login = std::env::var("DT_LOGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DT_LOGIN environment variable is required",
        )
    })?;
    let password = std::env::var("DT_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DT_PASSWORD environment variable is required",
        )
    })?;

    let client = SmsClient::new(SmsAuth::new(login, password)?);
    let balance = client.get_balance().await?;
    println!(
        "balance: {}, credit: {}, currency: {}",
        balance.balance, balance.credit, balance.currency
    );

    Ok(())
}
