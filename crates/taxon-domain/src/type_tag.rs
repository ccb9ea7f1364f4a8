//! Type tag module - semantic categories a document can be classified into

/// Semantic type of a classified document
///
/// The set is closed. Every tag carries a stable label, written into output
/// attributes, and a route name, used by adapters to pick a destination.
/// `Unknown` is the terminal fallback when no schema accepts a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    /// Direct message inbox thread
    Direct,
    /// Explore grid page
    Explore,
    /// Explore clips page
    ExploreClip,
    /// Single clip media item inside explore
    ExploreClipMedia,
    /// Fill media item inside explore
    ExploreFillMedia,
    /// Explore layout block
    ExploreLayout,
    /// Explore section block
    ExploreSection,
    /// Single friendship status
    Friendship,
    /// Batch of friendship statuses
    FriendshipShowMany,
    /// Inbox listing
    Inbox,
    /// Single pending request
    Pending,
    /// Container of pending requests
    Pendings,
    /// User profile (several wire shapes, see the disambiguator)
    Profile,
    /// Story feed
    StoryFeed,
    /// Story feed tray
    StoryFeedTray,
    /// Single reel in a story tray
    StoryFeedTrayReel,
    /// Container of tray reels
    StoryFeedTrayReels,
    /// Single story item
    StoryItem,
    /// Story highlight
    StoryHighlight,
    /// Container of story highlights
    StoryHighlights,
    /// Story profile
    StoryProfile,
    /// Story profile edge
    StoryProfileEdge,
    /// Story reel
    StoryReel,
    /// No schema accepted the document
    Unknown,
    /// Bare user record
    User,
}

impl TypeTag {
    /// Every tag, in declaration order
    pub const ALL: [TypeTag; 25] = [
        TypeTag::Direct,
        TypeTag::Explore,
        TypeTag::ExploreClip,
        TypeTag::ExploreClipMedia,
        TypeTag::ExploreFillMedia,
        TypeTag::ExploreLayout,
        TypeTag::ExploreSection,
        TypeTag::Friendship,
        TypeTag::FriendshipShowMany,
        TypeTag::Inbox,
        TypeTag::Pending,
        TypeTag::Pendings,
        TypeTag::Profile,
        TypeTag::StoryFeed,
        TypeTag::StoryFeedTray,
        TypeTag::StoryFeedTrayReel,
        TypeTag::StoryFeedTrayReels,
        TypeTag::StoryItem,
        TypeTag::StoryHighlight,
        TypeTag::StoryHighlights,
        TypeTag::StoryProfile,
        TypeTag::StoryProfileEdge,
        TypeTag::StoryReel,
        TypeTag::Unknown,
        TypeTag::User,
    ];

    /// Stable label written into the `scheme.type` attribute
    pub fn label(&self) -> &'static str {
        match self {
            TypeTag::Direct => "direct",
            TypeTag::Explore => "explore:grid",
            TypeTag::ExploreClip => "explore:clip",
            TypeTag::ExploreClipMedia => "explore:clip-media",
            TypeTag::ExploreFillMedia => "explore:fill-media",
            TypeTag::ExploreLayout => "explore:layout",
            TypeTag::ExploreSection => "explore:section",
            TypeTag::Friendship => "friendship:single",
            TypeTag::FriendshipShowMany => "friendship:many",
            TypeTag::Inbox => "inbox",
            TypeTag::Pending => "pending:single",
            TypeTag::Pendings => "pending:container",
            TypeTag::Profile => "profile",
            TypeTag::StoryFeed => "story:feed",
            TypeTag::StoryFeedTray => "story:feed-tray",
            TypeTag::StoryFeedTrayReel => "story:feed-tray-reel",
            TypeTag::StoryFeedTrayReels => "story:feed-tray-reel-container",
            TypeTag::StoryItem => "story:item",
            TypeTag::StoryHighlight => "story:highlight",
            TypeTag::StoryHighlights => "story:highlight:container",
            TypeTag::StoryProfile => "story:profile",
            TypeTag::StoryProfileEdge => "story:profile-edge",
            TypeTag::StoryReel => "story:reel",
            TypeTag::Unknown => "unknown",
            TypeTag::User => "user",
        }
    }

    /// Name of the destination an adapter routes this type to
    pub fn route(&self) -> &'static str {
        match self {
            TypeTag::Direct => "direct",
            TypeTag::Explore => "explore",
            TypeTag::ExploreClip => "explore.clip",
            TypeTag::ExploreClipMedia => "explore.clip.media",
            TypeTag::ExploreFillMedia => "explore.fill.media",
            TypeTag::ExploreLayout => "explore.layout",
            TypeTag::ExploreSection => "explore.section",
            TypeTag::Friendship => "friendship",
            TypeTag::FriendshipShowMany => "friendship.show.many",
            TypeTag::Inbox => "inbox",
            TypeTag::Pending => "pending",
            TypeTag::Pendings => "pendings",
            TypeTag::Profile => "profile",
            TypeTag::StoryFeed => "story.feed",
            TypeTag::StoryFeedTray => "story.feed.tray",
            TypeTag::StoryFeedTrayReel => "story.feed.tray.reel",
            TypeTag::StoryFeedTrayReels => "story.feed.tray.reels",
            TypeTag::StoryItem => "story.item",
            TypeTag::StoryHighlight => "story.highlight",
            TypeTag::StoryHighlights => "story.highlights",
            TypeTag::StoryProfile => "story.profile",
            TypeTag::StoryProfileEdge => "story.profile.edge",
            TypeTag::StoryReel => "story.reel",
            TypeTag::Unknown => "unknown",
            TypeTag::User => "user",
        }
    }

    /// Look a tag up by its label (exact match)
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.label() == label)
    }

    /// Whether this is the `Unknown` fallback
    pub fn is_unknown(&self) -> bool {
        matches!(self, TypeTag::Unknown)
    }
}

impl std::str::FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("Invalid type tag: {}", s))
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<_> = TypeTag::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), TypeTag::ALL.len());
    }

    #[test]
    fn test_routes_are_unique() {
        let routes: HashSet<_> = TypeTag::ALL.iter().map(|t| t.route()).collect();
        assert_eq!(routes.len(), TypeTag::ALL.len());
    }

    #[test]
    fn test_label_lookup_round_trips() {
        for tag in TypeTag::ALL {
            assert_eq!(TypeTag::from_label(tag.label()), Some(tag));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("explore:clip".parse::<TypeTag>(), Ok(TypeTag::ExploreClip));
        assert_eq!("profile".parse::<TypeTag>(), Ok(TypeTag::Profile));
        assert!("PROFILE".parse::<TypeTag>().is_err());
        assert!("".parse::<TypeTag>().is_err());
    }

    #[test]
    fn test_unknown_is_present() {
        assert!(TypeTag::ALL.contains(&TypeTag::Unknown));
        assert!(TypeTag::Unknown.is_unknown());
        assert!(!TypeTag::User.is_unknown());
        assert_eq!(TypeTag::Unknown.route(), "unknown");
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(TypeTag::StoryHighlights.to_string(), "story:highlight:container");
    }
}
