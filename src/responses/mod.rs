pub mod download;
pub mod errors;
pub mod html;
pub mod json;

pub use errors::{error_response, ResultResp};

pub use download::xlsx_response;
pub use html::{css_response, html_response};
pub use json::json_response;
