use std::io;

use decisiontelecom::{SmsAuth, SmsClient, SmsMessageId};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let login = required_env("DT_LOGIN")?;
    let password = required_env("DT_PASSWORD")?;
    let message_id: i64 = required_env("DT_MESSAGE_ID")?.parse()?;

    let client = SmsClient::new(SmsAuth::new(login, password)?);
    let status = client
        .get_message_status(SmsMessageId::new(message_id))
        .await?;
    println!("status: {status} (code {})", status.code());

    Ok(())
}
