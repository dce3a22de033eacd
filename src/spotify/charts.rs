use crate::{
    info,
    spotify::{WebApi, chart_csv},
    types::Charts,
    uri::{CHART_URI_PATTERN, ChartQuery},
    warning,
};

impl WebApi {
    /// Retrieves a regional or viral chart.
    ///
    /// The URI must follow `spotify:charts:metric:region:time_window:date`.
    /// Every parameter is checked against its valid options before anything
    /// goes over the network; the first invalid one is logged with those
    /// options and `None` is returned.
    ///
    /// A failed download or an unreadable CSV body is not an error: the chart
    /// record is built, cached and returned with an empty track list.
    ///
    /// # Arguments
    ///
    /// * `uri` - Chart URI with six tokens; also the cache key
    ///
    /// # Returns
    ///
    /// - `Some(Charts)` - The validated parameters and the chart's track URIs
    /// - `None` - The URI is malformed or has an invalid parameter
    ///
    /// # Example
    ///
    /// ```
    /// let charts = api.get_charts("spotify:charts:regional:us:weekly:latest").await;
    /// ```
    pub async fn get_charts(&mut self, uri: &str) -> Option<Charts> {
        if let Some(cached) = self.cache.charts.get(uri) {
            return Some(cached.clone());
        }

        let query = match ChartQuery::parse(uri) {
            Ok(query) => query,
            Err(e) => {
                warning!("{}", e);
                info!(
                    "Generally, a charts URI follows the pattern {}",
                    CHART_URI_PATTERN
                );
                return None;
            }
        };

        let tracks = self.get_chart_tracks(&query).await;
        let charts = Charts {
            metric: query.metric,
            region: query.region,
            window: query.window,
            date: query.date,
            tracks,
        };

        Some(self.cache.charts.insert(uri, charts).clone())
    }

    async fn get_chart_tracks(&mut self, query: &ChartQuery) -> Vec<String> {
        let url = format!("{}/{}", self.settings.charts_url, query.download_path());
        let description = format!("{} {} charts", query.region, query.metric);

        let Some(body) = self.request_text(&url, &description).await else {
            return Vec::new();
        };

        match chart_csv::parse_track_uris(&body) {
            Ok(tracks) => tracks,
            Err(e) => {
                warning!("Ignoring {}: {}", description, e);
                Vec::new()
            }
        }
    }
}
