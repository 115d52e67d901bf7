//! UUID-backed identifiers
//!
//! `Uuid` wraps the `uuid` crate's value with validated factories. Clock and
//! randomness dependent generation goes through the [`UuidGenerator`]
//! capability so callers (and tests) can substitute their own source.

use nutype::nutype;
use uuid::{Context, Timestamp, Uuid as RawUuid};

use crate::error::{Error, Result};

/// A validated UUID
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRef
))]
pub struct Uuid(RawUuid);

impl Uuid {
    /// Parses a UUID string, failing on anything `is_valid` rejects
    pub fn from_string(value: &str) -> Result<Self> {
        parse_hyphenated(value).map(Self::new).ok_or_else(|| {
            tracing::debug!(value, "rejected UUID");
            Error::invalid_uuid(value)
        })
    }

    /// Accepts the 36 character hyphenated form, optionally prefixed with
    /// `urn:uuid:` or wrapped in braces. The bare 32 digit form is rejected.
    pub fn is_valid(value: &str) -> bool {
        parse_hyphenated(value).is_some()
    }

    /// Version 1 UUID from the host node id, a clock sequence and the current time
    pub fn uuid1(node: Option<[u8; 6]>, clock_sequence: Option<u16>) -> Self {
        SystemUuidGenerator::default().uuid1(node, clock_sequence)
    }

    /// Version 3 UUID from the MD5 hash of a namespace UUID and a name
    pub fn uuid3(namespace: &str, name: &str) -> Result<Self> {
        let namespace = Self::from_string(namespace)?;
        Ok(SystemUuidGenerator::default().uuid3(&namespace, name))
    }

    /// Version 4 (random) UUID
    pub fn uuid4() -> Self {
        SystemUuidGenerator::default().uuid4()
    }

    /// Version 5 UUID from the SHA-1 hash of a namespace UUID and a name
    pub fn uuid5(namespace: &str, name: &str) -> Result<Self> {
        let namespace = Self::from_string(namespace)?;
        Ok(SystemUuidGenerator::default().uuid5(&namespace, name))
    }

    pub fn version(&self) -> usize {
        self.as_ref().get_version_num()
    }
}

fn parse_hyphenated(value: &str) -> Option<RawUuid> {
    let core = value.strip_prefix("urn:uuid:").unwrap_or(value);
    let core = core
        .strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
        .unwrap_or(core);
    if core.len() != 36 {
        return None;
    }
    RawUuid::try_parse(core).ok()
}

/// Source of new UUIDs, by version
///
/// Name-based versions are pure functions of their inputs and come with
/// default implementations. Time-based and random generation depend on
/// host state and must be supplied by the implementor.
pub trait UuidGenerator {
    fn uuid1(&self, node: Option<[u8; 6]>, clock_sequence: Option<u16>) -> Uuid;

    fn uuid4(&self) -> Uuid;

    fn uuid3(&self, namespace: &Uuid, name: &str) -> Uuid {
        Uuid::new(RawUuid::new_v3(namespace.as_ref(), name.as_bytes()))
    }

    fn uuid5(&self, namespace: &Uuid, name: &str) -> Uuid {
        Uuid::new(RawUuid::new_v5(namespace.as_ref(), name.as_bytes()))
    }
}

/// Generator backed by the system clock and the OS random source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemUuidGenerator {
    node_id: [u8; 6],
    clock_sequence: Option<u16>,
}

impl SystemUuidGenerator {
    pub fn new(node_id: [u8; 6], clock_sequence: Option<u16>) -> Self {
        Self {
            node_id,
            clock_sequence,
        }
    }

    /// Generator with a random node id (multicast bit set, per RFC 4122 §4.5)
    pub fn with_random_node() -> Self {
        let random = RawUuid::new_v4();
        let mut node_id = [0u8; 6];
        node_id.copy_from_slice(&random.as_bytes()[..6]);
        node_id[0] |= 0x01;
        Self::new(node_id, None)
    }

    pub fn node_id(&self) -> [u8; 6] {
        self.node_id
    }

    pub fn clock_sequence(&self) -> Option<u16> {
        self.clock_sequence
    }
}

impl Default for SystemUuidGenerator {
    fn default() -> Self {
        Self::with_random_node()
    }
}

impl UuidGenerator for SystemUuidGenerator {
    fn uuid1(&self, node: Option<[u8; 6]>, clock_sequence: Option<u16>) -> Uuid {
        let node = node.unwrap_or(self.node_id);
        let raw = match clock_sequence.or(self.clock_sequence) {
            Some(sequence) => RawUuid::new_v1(Timestamp::now(Context::new(sequence)), &node),
            None => RawUuid::now_v1(&node),
        };
        Uuid::new(raw)
    }

    fn uuid4(&self) -> Uuid {
        Uuid::new(RawUuid::new_v4())
    }
}

/// Identifier of a statement
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRef
))]
pub struct StatementId(Uuid);

impl StatementId {
    pub fn generate() -> Self {
        Self::new(Uuid::uuid4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self::new(uuid)
    }

    pub fn from_string(value: &str) -> Result<Self> {
        Uuid::from_string(value).map(Self::new)
    }

    pub fn uuid(&self) -> Uuid {
        *self.as_ref()
    }
}
