use crate::domain::{
    image::ImageView, quote::StockQuote, weather::WeatherReport, RequestId, WidgetKind,
    WidgetPayload,
};

/// Lifecycle of one HTTP-backed panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WidgetStatus<T> {
    #[default]
    Idle,
    Fetching,
    Ready(T),
    Failed(String),
}

/// A panel's status plus the sequence number of its latest request.
/// Results carrying any other number are stale and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSlot<T> {
    kind: WidgetKind,
    seq: u64,
    pub status: WidgetStatus<T>,
}

impl<T> WidgetSlot<T> {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            seq: 0,
            status: WidgetStatus::Idle,
        }
    }

    /// Start a new request; earlier ones become stale.
    pub fn begin(&mut self) -> RequestId {
        self.seq += 1;
        self.status = WidgetStatus::Fetching;
        RequestId::new(self.kind, self.seq)
    }

    pub fn is_current(&self, request: RequestId) -> bool {
        request.widget == self.kind && request.seq == self.seq
    }

    /// Returns false when the result was stale.
    pub fn resolve(&mut self, request: RequestId, view: T) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.status = WidgetStatus::Ready(view);
        true
    }

    pub fn fail(&mut self, request: RequestId, message: String) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.status = WidgetStatus::Failed(message);
        true
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.status {
            WidgetStatus::Ready(view) => Some(view),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetsState {
    pub weather: WidgetSlot<WeatherReport>,
    pub image: WidgetSlot<ImageView>,
    pub stock: WidgetSlot<StockQuote>,
}

impl Default for WidgetsState {
    fn default() -> Self {
        Self {
            weather: WidgetSlot::new(WidgetKind::Weather),
            image: WidgetSlot::new(WidgetKind::Image),
            stock: WidgetSlot::new(WidgetKind::Stock),
        }
    }
}

impl WidgetsState {
    /// Route a result to its panel. Returns false when it was stale.
    pub fn resolve(&mut self, request: RequestId, payload: WidgetPayload) -> bool {
        if request.widget != payload.kind() {
            log::warn!(
                "{} payload delivered for {} request",
                payload.kind(),
                request.widget
            );
            return false;
        }
        match payload {
            WidgetPayload::Weather(report) => self.weather.resolve(request, report),
            WidgetPayload::Image(view) => self.image.resolve(request, view),
            WidgetPayload::Quote(quote) => self.stock.resolve(request, quote),
        }
    }

    pub fn fail(&mut self, request: RequestId, message: String) -> bool {
        match request.widget {
            WidgetKind::Weather => self.weather.fail(request, message),
            WidgetKind::Image => self.image.fail(request, message),
            WidgetKind::Stock => self.stock.fail(request, message),
        }
    }
}
