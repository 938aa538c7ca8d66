use std::str::FromStr;

use ingest_api::{
    actions::FileAction,
    api::ClassifyResponse,
    client::IngestClient,
};
use tracing::{info, warn};

use crate::api::{AppliedAction, Policy};

/// Pairs every file with every policy whose condition it meets.
///
/// Files come in name order, policies in store order.
pub fn plan(tags: &ClassifyResponse, policies: &[Policy]) -> Vec<AppliedAction> {
    let mut applied = Vec::new();
    for (file, file_tags) in tags {
        for policy in policies {
            let matches = match policy.condition() {
                Some(wanted) => file_tags.iter().any(|tag| tag.as_str() == wanted),
                None => true,
            };
            if !matches {
                continue;
            }
            applied.push(AppliedAction {
                file: file.clone(),
                action: policy.action().map(str::to_string),
                policy: policy.name.clone(),
            });
        }
    }
    applied
}

/// Asks ingest to carry out the file actions in `applied`.
///
/// Actions other than quarantine and delete are only reported. A failed call is
/// logged and the run goes on, so a file deleted by one policy makes a later
/// one fail quietly.
pub async fn execute(client: &IngestClient, applied: &[AppliedAction]) {
    for entry in applied {
        let Some(action) = entry
            .action
            .as_deref()
            .and_then(|action| FileAction::from_str(action).ok())
        else {
            continue;
        };

        match client.action(&entry.file, action).await {
            Ok(_) => {
                info!(file = %entry.file, %action, policy = %entry.policy, "applied policy");
                metrics::counter!("policy_actions_applied_total", "action" => action.as_str())
                    .increment(1);
            }
            Err(e) => {
                warn!(file = %entry.file, %action, policy = %entry.policy, "ingest action failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingest_api::classify::PiiTag;
    use rstest::rstest;
    use serde_json::{json, Map};

    use crate::api::Rule;

    fn policy(name: &str, if_tag: Option<&str>, action: Option<&str>) -> Policy {
        Policy {
            id: 0,
            name: name.to_string(),
            rule: Some(Rule {
                if_tag: if_tag.map(str::to_string),
                action: action.map(str::to_string),
            }),
            extra: Map::new(),
        }
    }

    fn tags() -> ClassifyResponse {
        [
            ("b.txt".to_string(), vec![PiiTag::Ssn]),
            ("a.txt".to_string(), vec![PiiTag::Email]),
            ("c.txt".to_string(), vec![]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn files_by_name_then_policies_in_order() {
        let policies = [
            policy("ssn", Some("PII:SSN"), Some("quarantine")),
            policy("all", None, Some("flag")),
        ];

        let applied = plan(&tags(), &policies);
        assert_eq!(
            serde_json::to_value(&applied).unwrap(),
            json!([
                {"file": "a.txt", "action": "flag", "policy": "all"},
                {"file": "b.txt", "action": "quarantine", "policy": "ssn"},
                {"file": "b.txt", "action": "flag", "policy": "all"},
                {"file": "c.txt", "action": "flag", "policy": "all"},
            ])
        );
    }

    #[rstest]
    #[case(Some("PII:EMAIL"), vec!["a.txt"])]
    #[case(Some("PII:SSN"), vec!["b.txt"])]
    #[case(Some("PII:PHONE"), vec![])]
    #[case(Some(""), vec!["a.txt", "b.txt", "c.txt"])]
    #[case(None, vec!["a.txt", "b.txt", "c.txt"])]
    fn condition_selects_files(#[case] if_tag: Option<&str>, #[case] expected: Vec<&str>) {
        let applied = plan(&tags(), &[policy("p", if_tag, Some("delete"))]);
        let files: Vec<&str> = applied.iter().map(|a| a.file.as_str()).collect();
        assert_eq!(files, expected);
    }

    #[test]
    fn policy_without_rule_fires_with_no_action() {
        let bare = Policy {
            id: 0,
            name: "bare".to_string(),
            rule: None,
            extra: Map::new(),
        };
        let applied = plan(&tags(), &[bare]);
        assert_eq!(applied.len(), 3);
        assert!(applied.iter().all(|a| a.action.is_none()));
    }

    #[test]
    fn nothing_to_pair() {
        assert!(plan(&ClassifyResponse::new(), &[policy("p", None, None)]).is_empty());
        assert!(plan(&tags(), &[]).is_empty());
    }
}
