use crate::models::{ImageItem, ImagePayload};
use crate::providers::ProviderError;
use tracing::{debug, warn};

const SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Number of images requested from the provider.
const IMAGE_RESULT_COUNT: u32 = 3;

/// Search for free-to-use images and return their URLs with attribution.
/// Always returns user-presentable text.
pub async fn search_images(
    client: &reqwest::Client,
    query: &str,
    api_key: &str,
    cse_id: &str,
) -> String {
    match request_images(client, query, api_key, cse_id).await {
        Ok(payload) => format_images(&payload),
        Err(e) => {
            warn!("image search for {query:?} failed: {e}");
            format!("Oops! There was an issue with the request: {e}")
        }
    }
}

async fn request_images(
    client: &reqwest::Client,
    query: &str,
    api_key: &str,
    cse_id: &str,
) -> Result<ImagePayload, ProviderError> {
    debug!("searching images for {query:?}");
    let response = client
        .get(SEARCH_URL)
        .query(&[
            ("q", query),
            ("cx", cse_id),
            ("key", api_key),
            ("searchType", "image"),
            ("num", &IMAGE_RESULT_COUNT.to_string()),
            ("usageRights", "freeToUse"),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ProviderError::Provider(format!(
            "HTTP {}",
            response.status()
        )));
    }

    Ok(response.json::<ImagePayload>().await?)
}

fn format_images(payload: &ImagePayload) -> String {
    let items = match &payload.items {
        Some(items) => items,
        None => {
            return "Sorry, I couldn’t find any images. How about trying a different query?"
                .to_string()
        }
    };

    if items.is_empty() {
        return "I couldn't find any images on that topic. Maybe try a different search?"
            .to_string();
    }

    let images: Vec<String> = items.iter().map(format_image).collect();
    format!("Here are some images I found for you:\n{}", images.join("\n"))
}

fn format_image(item: &ImageItem) -> String {
    let mut line = item
        .link
        .clone()
        .unwrap_or_else(|| "No image available".to_string());
    let creator = item.image.as_ref().and_then(|meta| meta.creator.as_deref());
    if let Some(creator) = creator.filter(|c| !c.is_empty()) {
        line.push_str(&format!(" (Credit: {creator})"));
    }
    line
}
