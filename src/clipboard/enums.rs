use crate::clipboard::{ClipboardError, Result};

const WRITE_PREFIX: &str = "Enum";

/// One declared member of an enumeration type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
	/// Declared member name.
	pub name: String,
	/// Declared ordinal.
	pub ordinal: usize,
}

/// Ordered list of declared members for one enumeration type.
///
/// Plain caller-supplied data; declaration order is the tie-break when two
/// names normalize identically.
#[derive(Debug, Clone, Default)]
pub struct EnumDescriptor {
	members: Vec<EnumMember>,
}

impl EnumDescriptor {
	/// Build a descriptor from names in declaration order, ordinals `0..n`.
	pub fn new(names: &[&str]) -> Self {
		let members = names
			.iter()
			.enumerate()
			.map(|(ordinal, name)| EnumMember {
				name: (*name).to_owned(),
				ordinal,
			})
			.collect();
		Self { members }
	}

	/// Build a descriptor from explicit members in declaration order.
	pub fn from_members(members: Vec<EnumMember>) -> Self {
		Self { members }
	}

	/// Declared members in declaration order.
	pub fn members(&self) -> &[EnumMember] {
		&self.members
	}

	/// Declared name for an ordinal.
	pub fn name_of(&self, ordinal: usize) -> Option<&str> {
		self.members
			.iter()
			.find(|member| member.ordinal == ordinal)
			.map(|member| member.name.as_str())
	}
}

/// Render an enum member as `Enum:<declared name>`.
pub fn write_enum(descriptor: &EnumDescriptor, ordinal: usize) -> Result<String> {
	let name = descriptor
		.name_of(ordinal)
		.ok_or_else(|| ClipboardError::UnknownMember { token: ordinal.to_string() })?;
	Ok(format!("{WRITE_PREFIX}:{name}"))
}

/// Resolve `<prefix>:<member>` to the declared ordinal.
///
/// The prefix before the first `:` is ignored. The member token and each
/// declared name are normalized before comparison; the first declared match
/// wins.
pub fn parse_enum(descriptor: &EnumDescriptor, text: &str) -> Result<usize> {
	if text.is_empty() {
		return Err(ClipboardError::EmptyInput);
	}
	let Some((_, token)) = text.split_once(':') else {
		return Err(ClipboardError::InvalidFormat { detail: format!("missing member separator in {text}") });
	};
	if token.is_empty() {
		return Err(ClipboardError::InvalidFormat { detail: "empty member token".to_owned() });
	}

	let normalized = normalize(token);
	for member in &descriptor.members {
		if normalize(&member.name) == normalized {
			return Ok(member.ordinal);
		}
	}
	Err(ClipboardError::UnknownMember { token: token.to_owned() })
}

/// Lowercase and strip underscores for member comparison.
fn normalize(name: &str) -> String {
	name.chars().filter(|ch| *ch != '_').flat_map(char::to_lowercase).collect()
}
