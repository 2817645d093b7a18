//! Public output types for leadctl command responses.

use serde::Serialize;

// ============================================================================
// Bulk Operations (for commands that process multiple items)
// ============================================================================

/// Standardized bulk execution result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResult<T: Serialize> {
    pub action: String,
    pub results: Vec<ItemOutcome<T>>,
    pub summary: BulkSummary,
}

/// Outcome for a single item in a bulk operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutcome<T: Serialize> {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary of bulk operation results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl<T: Serialize> BulkResult<T> {
    /// Collect per-item results, counting successes and failures.
    pub fn from_outcomes(
        action: impl Into<String>,
        items: impl IntoIterator<Item = (String, crate::Result<T>)>,
    ) -> Self {
        let results: Vec<ItemOutcome<T>> = items
            .into_iter()
            .map(|(id, outcome)| match outcome {
                Ok(value) => ItemOutcome {
                    id,
                    result: Some(value),
                    error: None,
                },
                Err(err) => ItemOutcome {
                    id,
                    result: None,
                    error: Some(err.describe()),
                },
            })
            .collect();

        let failed = results.iter().filter(|r| r.error.is_some()).count();

        Self {
            action: action.into(),
            summary: BulkSummary {
                total: results.len(),
                succeeded: results.len() - failed,
                failed,
            },
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Serialize)]
    struct Written {
        path: String,
    }

    #[test]
    fn from_outcomes_counts_failures_and_flattens_results() {
        let bulk = BulkResult::from_outcomes(
            "client.generate_all",
            vec![
                (
                    "1".to_string(),
                    Ok(Written {
                        path: "a.json".to_string(),
                    }),
                ),
                ("2".to_string(), Err(Error::internal_io("disk full", None))),
            ],
        );

        assert_eq!(bulk.summary.total, 2);
        assert_eq!(bulk.summary.succeeded, 1);
        assert_eq!(bulk.summary.failed, 1);

        let value = serde_json::to_value(&bulk).unwrap();
        assert_eq!(value["results"][0]["path"], "a.json");
        assert!(value["results"][0].get("error").is_none());
        assert_eq!(value["results"][1]["error"], "IO error: disk full");
    }
}
