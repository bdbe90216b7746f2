#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No input text: pass TEXT or pipe it through stdin")]
    MissingInput,

    #[error("Input is not valid UTF-8")]
    InvalidInput,
}
