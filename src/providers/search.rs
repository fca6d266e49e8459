use crate::models::{SearchItem, SearchPayload};
use crate::providers::ProviderError;
use tracing::{debug, warn};

const SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Number of web results requested from the provider.
const WEB_RESULT_COUNT: u32 = 5;

/// Search the web for travel information and summarize the top results.
/// Always returns user-presentable text.
pub async fn search_travel_info(
    client: &reqwest::Client,
    query: &str,
    api_key: &str,
    cse_id: &str,
) -> String {
    match request_search(client, query, api_key, cse_id).await {
        Ok(payload) => summarize(&payload),
        Err(e) => {
            warn!("web search for {query:?} failed: {e}");
            format!("Oops! There was an issue with the request: {e}")
        }
    }
}

async fn request_search(
    client: &reqwest::Client,
    query: &str,
    api_key: &str,
    cse_id: &str,
) -> Result<SearchPayload, ProviderError> {
    debug!("searching the web for {query:?}");
    let response = client
        .get(SEARCH_URL)
        .query(&[
            ("q", query),
            ("cx", cse_id),
            ("key", api_key),
            ("num", &WEB_RESULT_COUNT.to_string()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ProviderError::Provider(format!(
            "HTTP {}",
            response.status()
        )));
    }

    Ok(response.json::<SearchPayload>().await?)
}

/// An absent `items` field and an empty one get different wording, matching
/// the provider's distinction between "nothing indexed" and "no hits".
fn summarize(payload: &SearchPayload) -> String {
    let items = match &payload.items {
        Some(items) => items,
        None => {
            return "Sorry, I couldn’t find any information on that topic. \
                    How about trying a different query?"
                .to_string()
        }
    };

    if items.is_empty() {
        return "Hmm, I couldn’t find much on that. Maybe try asking about something else?"
            .to_string();
    }

    let results: Vec<String> = items.iter().map(format_item).collect();
    format!("Here’s what I found for you:\n{}", results.join("\n"))
}

fn format_item(item: &SearchItem) -> String {
    let title = item.title.as_deref().unwrap_or("No title available");
    let snippet = item.snippet.as_deref().unwrap_or("No snippet available");
    format!("- {title}:\n  - Summary: {snippet}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> SearchPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn results_are_summarized_with_title_and_snippet() {
        let p = payload(json!({
            "items": [
                { "title": "Visit Lisbon", "snippet": "Hills and trams." },
                { "title": "Lisbon food", "snippet": "Pastéis de nata." }
            ]
        }));
        let text = summarize(&p);
        assert!(text.starts_with("Here’s what I found for you:\n"));
        assert!(text.contains("- Visit Lisbon:\n  - Summary: Hills and trams.\n"));
        assert!(text.contains("- Lisbon food:\n  - Summary: Pastéis de nata.\n"));
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let p = payload(json!({ "items": [ {} ] }));
        let text = summarize(&p);
        assert!(text.contains("- No title available:\n  - Summary: No snippet available\n"));
    }

    #[test]
    fn absent_items_field_gets_no_information_message() {
        let text = summarize(&payload(json!({})));
        assert!(text.contains("couldn’t find any information on that topic"));
    }

    #[test]
    fn empty_items_list_gets_couldnt_find_much_message() {
        let text = summarize(&payload(json!({ "items": [] })));
        assert!(text.contains("couldn’t find much on that"));
    }

    #[test]
    fn absent_and_empty_messages_differ() {
        assert_ne!(
            summarize(&payload(json!({}))),
            summarize(&payload(json!({ "items": [] })))
        );
    }

    #[test]
    fn summarizing_is_pure() {
        let p = payload(json!({ "items": [{ "title": "A", "snippet": "B" }] }));
        assert_eq!(summarize(&p), summarize(&p));
    }
}
