use tabled::Table;

use crate::{spotify::WebApi, types::NameTableRow, warning};

pub async fn artists(api: &mut WebApi, uris: &[String]) {
    let mut rows: Vec<NameTableRow> = Vec::new();

    for uri in uris {
        match api.get_artists_on_album(uri).await {
            Some(names) => rows.push(NameTableRow {
                uri: uri.clone(),
                names: names.join(", "),
            }),
            None => warning!("Cannot resolve artists of {}", uri),
        }
    }

    if !rows.is_empty() {
        println!("{}", Table::new(rows));
    }
}
