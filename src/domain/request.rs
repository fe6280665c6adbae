use std::time::Duration;

use url::Url;

use crate::domain::value::{MessageText, RawPhoneNumber, SenderId};

#[derive(Debug, Clone)]
/// SMS message for the `send` endpoint.
pub struct SmsMessage {
    receiver: RawPhoneNumber,
    sender: SenderId,
    text: MessageText,
    delivery: bool,
}

impl SmsMessage {
    /// Create a message. Set `delivery` to request a delivery receipt (`dlr=1`), which is
    /// required to query the status later.
    pub fn new(
        receiver: RawPhoneNumber,
        sender: SenderId,
        text: MessageText,
        delivery: bool,
    ) -> Self {
        Self {
            receiver,
            sender,
            text,
            delivery,
        }
    }

    pub fn receiver(&self) -> &RawPhoneNumber {
        &self.receiver
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn delivery(&self) -> bool {
        self.delivery
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViberMessageType {
    TextOnly,
    TextImageButton,
    TextOnly2Way,
    TextImageButton2Way,
}

impl ViberMessageType {
    pub fn code(self) -> u16 {
        match self {
            Self::TextOnly => 106,
            Self::TextImageButton => 108,
            Self::TextOnly2Way => 206,
            Self::TextImageButton2Way => 208,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Viber sending procedure.
pub enum ViberSourceType {
    #[default]
    Promotional,
    Transactional,
}

impl ViberSourceType {
    pub fn code(self) -> u8 {
        match self {
            Self::Promotional => 1,
            Self::Transactional => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Caption and target URL of the button in `TextImageButton` messages.
pub struct ViberButton {
    pub caption: String,
    pub action: Url,
}

#[derive(Debug, Clone)]
/// Viber message for the `send-viber` endpoint.
///
/// Optional parts are set with the `with_*` methods and omitted from the request when unset.
pub struct ViberMessage {
    sender: SenderId,
    receiver: RawPhoneNumber,
    message_type: ViberMessageType,
    source_type: ViberSourceType,
    text: Option<MessageText>,
    image_url: Option<Url>,
    button: Option<ViberButton>,
    callback_url: Option<Url>,
    validity_period: Option<Duration>,
}

impl ViberMessage {
    pub fn new(
        sender: SenderId,
        receiver: RawPhoneNumber,
        message_type: ViberMessageType,
        source_type: ViberSourceType,
    ) -> Self {
        Self {
            sender,
            receiver,
            message_type,
            source_type,
            text: None,
            image_url: None,
            button: None,
            callback_url: None,
            validity_period: None,
        }
    }

    pub fn with_text(mut self, text: MessageText) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_image_url(mut self, image_url: Url) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn with_button(mut self, caption: impl Into<String>, action: Url) -> Self {
        self.button = Some(ViberButton {
            caption: caption.into(),
            action,
        });
        self
    }

    /// URL the gateway calls back with status updates.
    pub fn with_callback_url(mut self, callback_url: Url) -> Self {
        self.callback_url = Some(callback_url);
        self
    }

    /// Message lifetime. Sent with whole-second precision.
    pub fn with_validity_period(mut self, validity_period: Duration) -> Self {
        self.validity_period = Some(validity_period);
        self
    }

    /// Attach an alternative SMS text, sent when the Viber message cannot be delivered.
    pub fn with_sms_text(self, sms_text: MessageText) -> ViberPlusSmsMessage {
        ViberPlusSmsMessage {
            viber: self,
            sms_text,
        }
    }

    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    pub fn receiver(&self) -> &RawPhoneNumber {
        &self.receiver
    }

    pub fn message_type(&self) -> ViberMessageType {
        self.message_type
    }

    pub fn source_type(&self) -> ViberSourceType {
        self.source_type
    }

    pub fn text(&self) -> Option<&MessageText> {
        self.text.as_ref()
    }

    pub fn image_url(&self) -> Option<&Url> {
        self.image_url.as_ref()
    }

    pub fn button(&self) -> Option<&ViberButton> {
        self.button.as_ref()
    }

    pub fn callback_url(&self) -> Option<&Url> {
        self.callback_url.as_ref()
    }

    pub fn validity_period(&self) -> Option<Duration> {
        self.validity_period
    }
}

#[derive(Debug, Clone)]
/// Viber message with a fallback SMS text (`text_sms`).
pub struct ViberPlusSmsMessage {
    viber: ViberMessage,
    sms_text: MessageText,
}

impl ViberPlusSmsMessage {
    pub fn viber(&self) -> &ViberMessage {
        &self.viber
    }

    pub fn sms_text(&self) -> &MessageText {
        &self.sms_text
    }
}
