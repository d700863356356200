use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Error values returned to clients as response bodies.
///
/// The `Display` output is the client-facing message. Serialized form is
/// `{"name": "MissingParamError", "message": "Missing param: email", "param": "email"}`;
/// `param` is omitted for [`HttpError::ServerError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("Missing param: {0}")]
    MissingParam(String),
    #[error("Invalid param: {0}")]
    InvalidParam(String),
    #[error("Internal server error")]
    ServerError,
}

impl HttpError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        Self::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        Self::InvalidParam(field.into())
    }

    pub fn name(&self) -> &'static str {
        match self {
            HttpError::MissingParam(_) => "MissingParamError",
            HttpError::InvalidParam(_) => "InvalidParamError",
            HttpError::ServerError => "ServerError",
        }
    }

    pub fn param(&self) -> Option<&str> {
        match self {
            HttpError::MissingParam(field) | HttpError::InvalidParam(field) => Some(field),
            HttpError::ServerError => None,
        }
    }
}

impl Serialize for HttpError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let field_count = if self.param().is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("HttpError", field_count)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("message", &self.to_string())?;
        if let Some(param) = self.param() {
            state.serialize_field("param", param)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn messages_name_the_offending_field() {
        assert_eq!(
            HttpError::missing_param("email").to_string(),
            "Missing param: email"
        );
        assert_eq!(
            HttpError::invalid_param("passwordConfirmation").to_string(),
            "Invalid param: passwordConfirmation"
        );
        assert_eq!(HttpError::ServerError.to_string(), "Internal server error");
    }

    #[test]
    fn serializes_name_message_and_param() {
        let value = serde_json::to_value(HttpError::missing_param("name")).expect("serializes");
        assert_eq!(
            value,
            json!({
                "name": "MissingParamError",
                "message": "Missing param: name",
                "param": "name",
            })
        );
    }

    #[test]
    fn server_error_serializes_without_param() {
        let value = serde_json::to_value(HttpError::ServerError).expect("serializes");
        assert_eq!(
            value,
            json!({ "name": "ServerError", "message": "Internal server error" })
        );
    }
}
