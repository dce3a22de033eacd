use tabled::Table;

use crate::{spotify::WebApi, types::UriTableRow, warning};

pub async fn charts(api: &mut WebApi, uris: &[String]) {
    for uri in uris {
        let Some(charts) = api.get_charts(uri).await else {
            continue;
        };

        if charts.tracks.is_empty() {
            warning!("Chart {} has no tracks", uri);
            continue;
        }

        let rows: Vec<UriTableRow> = charts
            .tracks
            .iter()
            .enumerate()
            .map(|(i, track)| UriTableRow {
                position: i + 1,
                uri: track.clone(),
            })
            .collect();

        println!(
            "Metric: {metric}\tRegion: {region}\tWindow: {window}\tDate: {date}\n{table}\n",
            metric = charts.metric,
            region = charts.region,
            window = charts.window,
            date = charts.date,
            table = Table::new(rows)
        );
    }
}
