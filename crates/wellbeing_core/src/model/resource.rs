//! Static help resources. Compiled in, never persisted.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: &'static str,
    pub desc: &'static str,
    /// Placeholder target until real links exist.
    pub link: &'static str,
}

pub const RESOURCES: [ResourceLink; 3] = [
    ResourceLink {
        title: "When to seek professional help",
        desc: "Signs that it’s time to talk to a professional.",
        link: "#",
    },
    ResourceLink {
        title: "Sleep toolkit",
        desc: "Simple habits to improve sleep quality.",
        link: "#",
    },
    ResourceLink {
        title: "Study stress quick tips",
        desc: "Planning and breaks that actually work.",
        link: "#",
    },
];
