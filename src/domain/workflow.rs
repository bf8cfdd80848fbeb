use serde::{Deserialize, Serialize};

/// Trigger-relevant subset of a GitHub Actions workflow definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowTriggerSpec {
    pub on: Triggers,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Triggers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestTrigger>,
}

// https://docs.github.com/en/actions/writing-workflows/workflow-syntax-for-github-actions#onpull_requestpull_request_targetbranchesbranches-ignore
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PullRequestTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches_ignore: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths_ignore: Option<Vec<String>>,
}

/// A decoded workflow together with the base name of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowFile {
    pub filename: String,
    pub workflow: WorkflowTriggerSpec,
}

const PULL_REQUEST_EVENT: &str = "pull_request";

impl WorkflowTriggerSpec {
    pub fn pull_request(&self) -> Option<&PullRequestTrigger> {
        self.on.pull_request.as_ref()
    }

    pub fn parse_yaml(content: &str) -> Result<Self, String> {
        let dto: dto::WorkflowDto = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        let spec: WorkflowTriggerSpec = dto.try_into()?;
        spec.validate()?;
        Ok(spec)
    }

    fn validate(&self) -> Result<(), String> {
        let Some(trigger) = self.pull_request() else {
            return Ok(());
        };
        if trigger.branches.is_some() && trigger.branches_ignore.is_some() {
            return Err(
                "\"on.pull_request\" cannot use both the branches and branches-ignore filters"
                    .into(),
            );
        }
        if trigger.paths.is_some() && trigger.paths_ignore.is_some() {
            return Err(
                "\"on.pull_request\" cannot use both the paths and paths-ignore filters".into()
            );
        }
        Ok(())
    }
}

mod dto {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    pub struct WorkflowDto {
        pub on: Option<OnDto>,
    }

    /// `on` accepts a single event name, a list of names, or a map keyed by event.
    #[derive(Debug, Clone, Deserialize)]
    #[serde(untagged)]
    pub enum OnDto {
        Event(String),
        Events(Vec<String>),
        Map(BTreeMap<String, serde_yaml::Value>),
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub struct PullRequestDto {
        pub types: Option<Vec<String>>,
        pub branches: Option<Vec<String>>,
        pub branches_ignore: Option<Vec<String>>,
        pub paths: Option<Vec<String>>,
        pub paths_ignore: Option<Vec<String>>,
    }

    impl TryFrom<WorkflowDto> for WorkflowTriggerSpec {
        type Error = String;

        fn try_from(dto: WorkflowDto) -> Result<Self, Self::Error> {
            let on = dto.on.ok_or_else(|| "Workflow must have an \"on\" property".to_string())?;

            let pull_request = match on {
                OnDto::Event(event) => {
                    (event == PULL_REQUEST_EVENT).then(PullRequestTrigger::default)
                }
                OnDto::Events(events) => events
                    .iter()
                    .any(|event| event == PULL_REQUEST_EVENT)
                    .then(PullRequestTrigger::default),
                OnDto::Map(mut events) => match events.remove(PULL_REQUEST_EVENT) {
                    None => None,
                    Some(serde_yaml::Value::Null) => Some(PullRequestTrigger::default()),
                    Some(value @ serde_yaml::Value::Mapping(_)) => {
                        let dto: PullRequestDto = serde_yaml::from_value(value)
                            .map_err(|e| format!("Workflow \"on.pull_request\": {}", e))?;
                        Some(dto.into())
                    }
                    Some(_) => {
                        return Err(
                            "Workflow \"on.pull_request\" property must be a mapping".into()
                        );
                    }
                },
            };

            Ok(WorkflowTriggerSpec { on: Triggers { pull_request } })
        }
    }

    impl From<PullRequestDto> for PullRequestTrigger {
        fn from(dto: PullRequestDto) -> Self {
            PullRequestTrigger {
                types: dto.types,
                branches: dto.branches,
                branches_ignore: dto.branches_ignore,
                paths: dto.paths,
                paths_ignore: dto.paths_ignore,
            }
        }
    }
}
