use std::time::Duration;

use reqwest::Client;

use crate::prelude::*;

/// Build the default client shared by both endpoints.
pub fn try_new() -> Result<Client> {
    Ok(Client::builder().timeout(Duration::from_secs(10)).build()?)
}
