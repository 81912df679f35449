use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The part of an article the keypad layer needs: where it is on the map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleRef {
    pub id: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl ArticleRef {
    pub fn located(id: impl Into<String>, at: GeoPoint) -> Self {
        Self {
            id: id.into(),
            lat: Some(at.lat),
            lng: Some(at.lng),
        }
    }

    pub fn position(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(self.lat?, self.lng?))
    }
}

/// Application state the keypad layer reads. Owned by the app and lent to
/// the runner on every call.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Current search results, in display order.
    pub articles: Vec<ArticleRef>,
    /// The article an `/article` screen is showing.
    pub current_article: Option<ArticleRef>,
    /// Arrow keys drive the volume overlay instead of focus.
    pub volume_mode: bool,
}

impl AppState {
    pub fn first_result_position(&self) -> Option<GeoPoint> {
        self.articles.first().and_then(ArticleRef::position)
    }

    pub fn current_article_position(&self) -> Option<GeoPoint> {
        self.current_article.as_ref().and_then(ArticleRef::position)
    }
}
