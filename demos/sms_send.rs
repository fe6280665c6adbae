use std::io;

use decisiontelecom::{MessageText, RawPhoneNumber, SenderId, SmsAuth, SmsClient, SmsMessage};

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
    let phone = required_env("DT_PHONE")?;
    let sender = required_env("DT_SENDER")?;
    let text = std::env::var("DT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the decisiontelecom demo.".to_owned());

    let client = SmsClient::new(SmsAuth::new(login, password)?);
    let message = SmsMessage::new(
        RawPhoneNumber::new(phone)?,
        SenderId::new(sender)?,
        MessageText::new(text)?,
        true,
    );

    let id = client.send_message(&message).await?;
    println!("message id: {id}");

    Ok(())
}
