use bitflags::bitflags;
use serde::{Deserialize, Deserializer};

bitflags! {
    /// Reflection kind bit, as numbered by TypeDoc 0.23 and later.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ReflectionKind: u32 {
        const PROJECT        = 1 << 0;
        const MODULE         = 1 << 1;
        const NAMESPACE      = 1 << 2;
        const ENUM           = 1 << 3;
        const VARIABLE       = 1 << 5;
        const FUNCTION       = 1 << 6;
        const CLASS          = 1 << 7;
        const INTERFACE      = 1 << 8;
        const PROPERTY       = 1 << 10;
        const METHOD         = 1 << 11;
        const CALL_SIGNATURE = 1 << 12;
        const PARAMETER      = 1 << 15;
        const TYPE_LITERAL   = 1 << 16;
        const TYPE_PARAMETER = 1 << 17;
        const TYPE_ALIAS     = 1 << 21;

        // Containers that get their own documentation page.
        const CONTAINER = Self::NAMESPACE.bits() | Self::MODULE.bits();
        // Kinds that carry a type worth documenting on their own.
        const DOCUMENTED = Self::INTERFACE.bits()
            | Self::TYPE_ALIAS.bits()
            | Self::FUNCTION.bits()
            | Self::VARIABLE.bits()
            | Self::TYPE_LITERAL.bits();
    }
}

const LABELS: [(ReflectionKind, &str); 15] = [
    (ReflectionKind::PROJECT, "project"),
    (ReflectionKind::MODULE, "module"),
    (ReflectionKind::NAMESPACE, "namespace"),
    (ReflectionKind::ENUM, "enum"),
    (ReflectionKind::VARIABLE, "variable"),
    (ReflectionKind::FUNCTION, "function"),
    (ReflectionKind::CLASS, "class"),
    (ReflectionKind::INTERFACE, "interface"),
    (ReflectionKind::PROPERTY, "property"),
    (ReflectionKind::METHOD, "method"),
    (ReflectionKind::CALL_SIGNATURE, "call signature"),
    (ReflectionKind::PARAMETER, "parameter"),
    (ReflectionKind::TYPE_LITERAL, "type literal"),
    (ReflectionKind::TYPE_PARAMETER, "type parameter"),
    (ReflectionKind::TYPE_ALIAS, "type alias"),
];

impl ReflectionKind {
    pub fn is_container(self) -> bool {
        self.intersects(Self::CONTAINER)
    }

    pub fn is_documented(self) -> bool {
        self.intersects(Self::DOCUMENTED)
    }

    pub fn label(self) -> &'static str {
        LABELS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map_or("other", |&(_, label)| label)
    }
}

/// Read as the raw number. Bits this crate does not name are retained, they
/// just never classify as anything modelled.
impl<'de> Deserialize<'de> for ReflectionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from_bits_retain)
    }
}
