pub mod match_workflows;
