//! Part fingerprints.
//!
//! Two scanned instances fold into the same part definition when they share a
//! group, an identity (shape definition or dynamic name) and a resolved size.

use md5::{Digest, Md5};
use u_cutlist_core::{CutListConfig, Size3d};

/// A display name read from an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    /// The name.
    pub name: String,
    /// True when the name came from instance-specific dynamic attributes.
    pub is_dynamic: bool,
}

impl ResolvedName {
    /// Creates a resolved name.
    pub fn new(name: impl Into<String>, is_dynamic: bool) -> Self {
        Self {
            name: name.into(),
            is_dynamic,
        }
    }
}

/// Resolves the display name of a scanned instance.
pub trait NameResolver {
    /// Reads the instance name using the given dynamic attribute.
    fn read_name(&self, dynamic_attributes_name: &str) -> ResolvedName;
}

impl<F> NameResolver for F
where
    F: Fn(&str) -> ResolvedName,
{
    fn read_name(&self, dynamic_attributes_name: &str) -> ResolvedName {
        self(dynamic_attributes_name)
    }
}

/// Dynamic-name request passed to [`generate_part_id`].
#[derive(Clone, Copy)]
pub struct DynamicName<'a> {
    /// Attribute holding the dynamic name.
    pub attribute: &'a str,
    /// Instance-side resolver.
    pub resolver: &'a dyn NameResolver,
}

/// Computes the fingerprint of a scanned instance.
///
/// When `dynamic_name` is given and the resolver reports a dynamic name, that
/// name replaces `definition_id`, so instances of one shape carrying different
/// user-assigned names stay apart. The size is always included so that scaled
/// copies of a shape stay apart too.
///
/// Returns a 32-character lowercase hex digest.
pub fn generate_part_id(
    group_id: &str,
    definition_id: &str,
    size: &Size3d,
    dynamic_name: Option<DynamicName<'_>>,
) -> String {
    let resolved = dynamic_name
        .map(|dynamic| dynamic.resolver.read_name(dynamic.attribute))
        .filter(|resolved| resolved.is_dynamic);
    let identity = resolved
        .as_ref()
        .map_or(definition_id, |resolved| resolved.name.as_str());

    let key = format!(
        "{}|{}|{}|{}|{}",
        group_id, identity, size.length, size.width, size.thickness
    );
    format!("{:x}", Md5::digest(key.as_bytes()))
}

/// Computes the fingerprint using the configured dynamic attribute.
///
/// The resolver is consulted only when `config.dynamic_attributes_name` is
/// set; otherwise this is [`generate_part_id`] without a dynamic name.
pub fn generate_part_id_with_config(
    group_id: &str,
    definition_id: &str,
    size: &Size3d,
    resolver: &dyn NameResolver,
    config: &CutListConfig,
) -> String {
    let dynamic_name = config
        .dynamic_attributes_name
        .as_deref()
        .map(|attribute| DynamicName { attribute, resolver });
    generate_part_id(group_id, definition_id, size, dynamic_name)
}
