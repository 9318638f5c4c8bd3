//! One fixture per capability combination.
//!
//! | Type | string marshaler | string unmarshaler | text marshaler | text unmarshaler |
//! |------|:---:|:---:|:---:|:---:|
//! | [`Apple`] | | | yes | |
//! | [`Banana`] | | | | yes |
//! | [`Orange`] | | | yes | yes |
//! | [`MarshalPeach`] | yes | | yes | |
//! | [`UnmarshalPeach`] | | yes | | yes |
//! | [`Pineapple`] | yes | | | yes |
//! | [`Cherry`] | yes | yes | | |
//! | [`Watermelon`] | | | fails | |
//! | [`Stone`] | | | | |

use crate::{StringMarshaler, StringUnmarshaler, StringableError, TextMarshaler, TextUnmarshaler};

fn utf8(text: &[u8]) -> Result<String, StringableError> {
    String::from_utf8(text.to_vec())
        .map_err(|e| StringableError::invalid_value("text", String::from_utf8_lossy(text), e))
}

/// Renders as the constant text `apple`.
#[derive(Debug, Default)]
pub struct Apple;

impl TextMarshaler for Apple {
    fn marshal_text(&self) -> Result<Vec<u8>, StringableError> {
        Ok(b"apple".to_vec())
    }
}

crate::probe!(Apple => text_marshaler);

/// Stores whatever text it is populated from.
#[derive(Debug, Default)]
pub struct Banana {
    /// Last populated text.
    pub content: String,
}

impl TextUnmarshaler for Banana {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), StringableError> {
        self.content = utf8(text)?;
        Ok(())
    }
}

crate::probe!(Banana => text_unmarshaler);

/// Round-trips its content through the text capabilities.
#[derive(Debug, Default)]
pub struct Orange {
    /// Current content.
    pub content: String,
}

impl TextMarshaler for Orange {
    fn marshal_text(&self) -> Result<Vec<u8>, StringableError> {
        Ok(self.content.clone().into_bytes())
    }
}

impl TextUnmarshaler for Orange {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), StringableError> {
        self.content = utf8(text)?;
        Ok(())
    }
}

crate::probe!(Orange => text_marshaler, text_unmarshaler);

/// Renders through both capabilities with distinguishable prefixes.
#[derive(Debug, Default)]
pub struct MarshalPeach {
    /// Current content.
    pub content: String,
}

impl StringMarshaler for MarshalPeach {
    fn marshal_string(&self) -> Result<String, StringableError> {
        Ok(format!("marshal_string:{}", self.content))
    }
}

impl TextMarshaler for MarshalPeach {
    fn marshal_text(&self) -> Result<Vec<u8>, StringableError> {
        Ok(format!("marshal_text:{}", self.content).into_bytes())
    }
}

crate::probe!(MarshalPeach => string_marshaler, text_marshaler);

/// Populates through both capabilities with distinguishable prefixes.
#[derive(Debug, Default)]
pub struct UnmarshalPeach {
    /// Current content.
    pub content: String,
}

impl StringUnmarshaler for UnmarshalPeach {
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
        self.content = format!("unmarshal_string:{s}");
        Ok(())
    }
}

impl TextUnmarshaler for UnmarshalPeach {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), StringableError> {
        self.content = format!("unmarshal_text:{}", utf8(text)?);
        Ok(())
    }
}

crate::probe!(UnmarshalPeach => string_unmarshaler, text_unmarshaler);

/// Renders natively and populates through text.
#[derive(Debug, Default)]
pub struct Pineapple {
    /// Current content.
    pub content: String,
}

impl StringMarshaler for Pineapple {
    fn marshal_string(&self) -> Result<String, StringableError> {
        Ok(format!("marshal_string:{}", self.content))
    }
}

impl TextUnmarshaler for Pineapple {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), StringableError> {
        self.content = format!("unmarshal_text:{}", utf8(text)?);
        Ok(())
    }
}

crate::probe!(Pineapple => string_marshaler, text_unmarshaler);

/// A complete native converter.
#[derive(Debug, Default)]
pub struct Cherry {
    /// Current content.
    pub content: String,
}

impl StringMarshaler for Cherry {
    fn marshal_string(&self) -> Result<String, StringableError> {
        Ok(format!("marshal_string:{}", self.content))
    }
}

impl StringUnmarshaler for Cherry {
    fn unmarshal_string(&mut self, s: &str) -> Result<(), StringableError> {
        self.content = format!("unmarshal_string:{s}");
        Ok(())
    }
}

crate::probe!(Cherry => stringable, string_marshaler, string_unmarshaler);

/// A text marshaler that always fails.
#[derive(Debug, Default)]
pub struct Watermelon;

impl TextMarshaler for Watermelon {
    fn marshal_text(&self) -> Result<Vec<u8>, StringableError> {
        Err(StringableError::other("spoiled"))
    }
}

crate::probe!(Watermelon => text_marshaler);

/// Has no capabilities at all.
#[derive(Debug, Default)]
pub struct Stone {
    /// Unused payload.
    pub weight: u32,
}

crate::probe!(Stone);
