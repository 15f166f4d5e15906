//! Bedrock model ID mapping
//!
//! Applies the optional cross-region inference profile prefix.

/// Region groups used as inference profile prefixes
const PROFILE_PREFIXES: [&str; 7] = ["us", "eu", "apac", "me", "sa", "ca", "af"];

/// Resolve the model id sent to Bedrock.
///
/// When `cross_region` is true, the model is prefixed with the region group
/// of `region` (`us-east-1` → `us.`). Ids that already carry a profile
/// prefix, and ARNs, are passed through.
pub fn to_bedrock_model_id(model: &str, cross_region: bool, region: &str) -> String {
    let model = model.trim();
    if !cross_region || model.starts_with("arn:") || has_profile_prefix(model) {
        return model.to_string();
    }
    format!("{}.{}", inference_profile_prefix(region), model)
}

fn has_profile_prefix(model: &str) -> bool {
    model
        .split_once('.')
        .is_some_and(|(head, _)| PROFILE_PREFIXES.contains(&head))
}

/// Derive the inference profile region group from an AWS region string.
///
/// `us-east-1` → `us`, `eu-west-1` → `eu`, `ap-northeast-1` → `apac`.
fn inference_profile_prefix(region: &str) -> &'static str {
    match region.split('-').next() {
        Some("us") => "us",
        Some("eu") => "eu",
        Some("ap") => "apac",
        Some("me") => "me",
        Some("sa") => "sa",
        Some("ca") => "ca",
        Some("af") => "af",
        _ => "us",
    }
}
