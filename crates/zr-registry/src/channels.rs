//! Per-zone channel tables.
//!
//! Each zone exposes three fixed channel sets to the simulation instance.
//! A channel's qualified name is `<zone>_<short>`, which is unique across
//! the instance as long as zone names are unique within it.

use core::fmt;

use zr_core::{ZrError, ZrResult};

/// Parameters read back from the instance once, after initialization.
pub const PARAMETER_OUTPUTS: [&str; 3] = ["V", "AFlo", "mSenFac"];

/// Values written to the instance on every exchange.
pub const INPUTS: [&str; 5] = ["T", "X", "mInlets_flow", "TAveInlet", "QGaiRad_flow"];

/// Values read from the instance on every exchange.
pub const OUTPUTS: [&str; 4] = ["TRad", "QConSen_flow", "QLat_flow", "QPeo_flow"];

const SEPARATOR: char = '_';

/// Handle the simulation instance assigns to a named variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueReference(pub u32);

impl fmt::Display for ValueReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vr{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    ParameterOutput,
    Input,
    Output,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 3] = [
        ChannelKind::ParameterOutput,
        ChannelKind::Input,
        ChannelKind::Output,
    ];

    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            ChannelKind::ParameterOutput => &PARAMETER_OUTPUTS,
            ChannelKind::Input => &INPUTS,
            ChannelKind::Output => &OUTPUTS,
        }
    }

    pub fn channel_count(self) -> usize {
        self.suffixes().len()
    }
}

/// Derive short and qualified names for `zone_name`.
///
/// Pure: the same inputs always give the same outputs.
pub fn derive_channel_names(zone_name: &str, suffixes: &[&str]) -> (Vec<String>, Vec<String>) {
    let short = suffixes.iter().map(|s| (*s).to_string()).collect();
    let qualified = suffixes
        .iter()
        .map(|s| qualified_name(zone_name, s))
        .collect();
    (short, qualified)
}

fn qualified_name(zone_name: &str, suffix: &str) -> String {
    let mut name = String::with_capacity(zone_name.len() + 1 + suffix.len());
    name.push_str(zone_name);
    name.push(SEPARATOR);
    name.push_str(suffix);
    name
}

/// One named channel and its (possibly unresolved) value reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub short_name: String,
    pub qualified_name: String,
    pub value_ref: Option<ValueReference>,
}

/// The channels of one kind for one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTable {
    kind: ChannelKind,
    channels: Vec<Channel>,
}

impl ChannelTable {
    /// Build the table for `zone_name` with every value reference unresolved.
    pub fn for_zone(kind: ChannelKind, zone_name: &str) -> Self {
        let (short, qualified) = derive_channel_names(zone_name, kind.suffixes());
        let channels = short
            .into_iter()
            .zip(qualified)
            .map(|(short_name, qualified_name)| Channel {
                short_name,
                qualified_name,
                value_ref: None,
            })
            .collect();
        Self { kind, channels }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn short_names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|c| c.short_name.as_str())
    }

    pub fn qualified_names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|c| c.qualified_name.as_str())
    }

    /// Value references in channel order; `None` for unresolved slots.
    pub fn value_refs(&self) -> impl Iterator<Item = Option<ValueReference>> + '_ {
        self.channels.iter().map(|c| c.value_ref)
    }

    /// True once every slot has a value reference.
    pub fn is_bound(&self) -> bool {
        self.channels.iter().all(|c| c.value_ref.is_some())
    }

    /// Resolve the slot at `index`.
    pub fn bind(&mut self, index: usize, value_ref: ValueReference) -> ZrResult<()> {
        let len = self.channels.len();
        let channel = self.channels.get_mut(index).ok_or(ZrError::IndexOob {
            what: "channel",
            index,
            len,
        })?;
        channel.value_ref = Some(value_ref);
        Ok(())
    }
}
