use bson::doc;
use futures::StreamExt;
use mongodb::{
    options::{ClientOptions, FindOptions},
    Client, Collection,
};

use super::results::BeaconResult;

async fn connect_to_mongodb(mongo_uri: &str) -> Result<Client, mongodb::error::Error> {
    let client_options = ClientOptions::parse(mongo_uri).await?;
    let client = Client::with_options(client_options)?;
    Ok(client)
}

/// Fetch the scored beacon findings for one analysis database, highest
/// score first. The output modes rely on this ordering and never re-sort.
pub async fn results(
    mongo_uri: &str,
    db_name: &str,
    min_score: f64,
) -> Result<Vec<BeaconResult>, mongodb::error::Error> {
    let client = connect_to_mongodb(mongo_uri).await?;
    let collection: Collection<BeaconResult> = client.database(db_name).collection("beacon");

    let filter = doc! { "score": { "$gte": min_score } };
    let options = FindOptions::builder().sort(doc! { "score": -1 }).build();

    // Query the database
    let mut cursor = collection.find(filter, options).await?;
    let mut data = Vec::new();

    while let Some(result) = cursor.next().await {
        data.push(result?);
    }

    Ok(data)
}
