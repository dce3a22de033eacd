use tabled::Table;

use crate::{
    spotify::WebApi,
    types::{GenreKind, NameTableRow},
    warning,
};

pub async fn genres(api: &mut WebApi, kind: GenreKind, uris: &[String]) {
    let mut rows: Vec<NameTableRow> = Vec::new();

    for uri in uris {
        let Some(track) = api.get_track(uri).await else {
            warning!("Cannot look up track {}", uri);
            continue;
        };

        match api.get_genres(kind, &track).await {
            Some(genres) if genres.is_empty() => {
                warning!("Spotify lists no {} genres for {}", kind, uri)
            }
            Some(genres) => rows.push(NameTableRow {
                uri: uri.clone(),
                names: genres.join(", "),
            }),
            None => warning!("Cannot resolve {} genres of {}", kind, uri),
        }
    }

    if !rows.is_empty() {
        println!("{}", Table::new(rows));
    }
}
