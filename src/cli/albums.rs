use tabled::Table;

use crate::{cli::spinner, spotify::WebApi, types::UriTableRow, warning};

pub async fn albums(api: &mut WebApi, uris: &[String]) {
    for uri in uris {
        let pb = spinner(format!("Fetching albums for {}...", uri));
        let albums = api.get_albums_with_filter(uri).await;
        pb.finish_and_clear();

        if albums.is_empty() {
            warning!("No albums found for {}", uri);
            continue;
        }

        let rows: Vec<UriTableRow> = albums
            .into_iter()
            .enumerate()
            .map(|(i, uri)| UriTableRow {
                position: i + 1,
                uri,
            })
            .collect();

        println!("Artist: {}\n{}\n", uri, Table::new(rows));
    }
}
