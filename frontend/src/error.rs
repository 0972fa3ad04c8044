use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the page to the browser.
///
/// None of these are shown to the visitor. The affected effect is skipped and
/// the error is logged.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl DomError {
    pub fn js(context: &'static str, err: JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        DomError::Js { context, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            DomError::MissingElement("orcamento".to_string()).to_string(),
            "no element with id `orcamento`"
        );
        let err = DomError::Js {
            context: "add scroll listener",
            message: "TypeError".to_string(),
        };
        assert_eq!(err.to_string(), "add scroll listener: TypeError");
    }
}
