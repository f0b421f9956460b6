//! Sort orders and time windows accepted by the listing endpoints.

use clap::ValueEnum;
use std::fmt;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Value sent to the API
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Subreddit listing order, sent as a path segment
    PostSort {
        #[default]
        Hot => "hot",
        New => "new",
        Top => "top",
        Rising => "rising",
        Controversial => "controversial",
    }
}

wire_enum! {
    /// Comment thread order
    CommentSort {
        #[default]
        Best => "confidence",
        Top => "top",
        New => "new",
        Controversial => "controversial",
        Old => "old",
        Qa => "qa",
    }
}

wire_enum! {
    /// Order of a user's submissions or comments
    UserSort {
        Hot => "hot",
        #[default]
        New => "new",
        Top => "top",
        Controversial => "controversial",
    }
}

wire_enum! {
    SearchSort {
        #[default]
        Relevance => "relevance",
        Hot => "hot",
        Top => "top",
        New => "new",
        Comments => "comments",
    }
}

wire_enum! {
    /// Time window for search and top listings
    TimeFilter {
        Hour => "hour",
        Day => "day",
        Week => "week",
        Month => "month",
        Year => "year",
        #[default]
        All => "all",
    }
}
