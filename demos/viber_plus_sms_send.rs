use std::io;

use decisiontelecom::{
    ApiKey, MessageText, RawPhoneNumber, SenderId, ViberMessage, ViberMessageType,
    ViberPlusSmsClient, ViberSourceType,
};

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
    let api_key = required_env("DT_API_KEY")?;
    let phone = required_env("DT_PHONE")?;
    let sender = required_env("DT_SENDER")?;
    let text = std::env::var("DT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the decisiontelecom demo.".to_owned());

    let client = ViberPlusSmsClient::new(ApiKey::new(api_key)?);
    let message = ViberMessage::new(
        SenderId::new(sender)?,
        RawPhoneNumber::new(phone)?,
        ViberMessageType::TextOnly,
        ViberSourceType::Promotional,
    )
    .with_text(MessageText::new(text.clone())?)
    .with_sms_text(MessageText::new(text)?);

    let id = client.send_message(&message).await?;
    println!("message id: {id}");

    let receipt = client.get_message_status(id).await?;
    println!(
        "status: {}, sms id: {:?}, sms status: {:?}",
        receipt.status, receipt.sms_message_id, receipt.sms_message_status
    );

    Ok(())
}
