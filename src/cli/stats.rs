use tabled::Table;

use crate::{spotify::WebApi, types::CacheTableRow};

pub fn cache_stats(api: &WebApi) {
    let rows: Vec<CacheTableRow> = api
        .cache()
        .counts()
        .into_iter()
        .map(|(kind, entries)| CacheTableRow {
            kind: kind.to_string(),
            entries,
        })
        .collect();

    println!("{}", Table::new(rows));
}
