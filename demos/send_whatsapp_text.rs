use std::io;

use infobip::{InfobipClient, InfobipError, PhoneNumber, TextContent, WhatsAppMessage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let from = required_env("INFOBIP_WHATSAPP_SENDER")?;
    let to = required_env("INFOBIP_PHONE")?;
    let text = std::env::var("INFOBIP_MESSAGE")
        .unwrap_or_else(|_| "Hello from the infobip demo.".to_owned());

    // Reads INFOBIP_API_KEY and INFOBIP_BASE_URL.
    let client = InfobipClient::from_env()?;
    let to = PhoneNumber::parse(None, to)?;
    let request = WhatsAppMessage::new(from, &to, TextContent::new(text));

    match client.send(&request).await {
        Ok(info) => println!(
            "message_id: {:?}, status: {:?}",
            info.message_id, info.status.name
        ),
        Err(InfobipError::RequestInvalid(result)) => {
            for violation in &result {
                eprintln!("{violation}");
            }
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
