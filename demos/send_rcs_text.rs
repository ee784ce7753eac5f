use std::io;

use infobip::{InfobipClient, RcsContent, RcsMessage, RcsText, Suggestion};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let to = std::env::var("INFOBIP_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "INFOBIP_PHONE environment variable is required",
        )
    })?;
    let sender = std::env::var("INFOBIP_RCS_SENDER").ok();

    let client = InfobipClient::from_env()?;
    let content = RcsContent::Text(RcsText {
        text: "Did this arrive?".to_owned(),
        suggestions: vec![Suggestion::reply("Yes", "yes"), Suggestion::reply("No", "no")],
    });
    let request = RcsMessage::new(sender, to, content).with_callback_data("demo");

    let response = client.send(&request).await?;
    for message in response.messages {
        println!("{:?}: {:?}", message.message_id, message.status.name);
    }

    Ok(())
}
