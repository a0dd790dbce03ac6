use crate::domain::{image::ImageSize, RequestId, WidgetPayload};

/// Requests and results for the weather, image and stock panels
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetMsg {
    FetchWeather,
    FetchImage(ImageSize),
    FetchQuote,
    OpenImage,

    Loaded {
        request: RequestId,
        payload: WidgetPayload,
    },
    Failed {
        request: RequestId,
        message: String,
    },
}
