//! Route taxonomies.
//!
//! Each taxonomy is a small closed enum whose variants carry a stable textual
//! tag. The taxonomies stay separate types so they can be enumerated (and
//! grown) independently; [`Route`] wraps them when a single navigation stack
//! has to hold a mix of destinations.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A tag that does not name any variant of the taxonomy it was decoded for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {taxonomy} tag '{tag}'")]
pub struct DecodeError {
    pub taxonomy: &'static str,
    pub tag: String,
}

impl DecodeError {
    pub fn new(taxonomy: &'static str, tag: impl Into<String>) -> Self {
        Self {
            taxonomy,
            tag: tag.into(),
        }
    }
}

/// A closed, ordered set of variants with stable textual tags.
pub trait Tagged: Copy + Eq + fmt::Debug + 'static {
    /// Name of the taxonomy, used in qualified route strings and errors.
    const TAXONOMY: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    fn tag(self) -> &'static str;

    fn from_tag(tag: &str) -> Result<Self, DecodeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.tag() == tag)
            .ok_or_else(|| DecodeError::new(Self::TAXONOMY, tag))
    }
}

/// Declares a [`Tagged`] enum together with its serde, `Display` and
/// `FromStr` impls. Variant order is the enumeration order.
macro_rules! tagged_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $taxonomy:literal {
            $($(#[$vmeta:meta])* $variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $tag)] $variant,)+
        }

        impl $name {
            /// Position of this variant in `ALL`.
            pub const fn index(self) -> usize {
                self as usize
            }
        }

        impl $crate::nav::route::Tagged for $name {
            const TAXONOMY: &'static str = $taxonomy;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn tag(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::nav::route::Tagged::tag(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::nav::route::DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::nav::route::Tagged>::from_tag(s)
            }
        }
    };
}

pub(crate) use tagged_enum;

tagged_enum! {
    /// Destinations reachable through navigation links on the root screen.
    pub enum LinkRoute in "link" {
        First => "first",
        Second => "second",
        /// Opens a screen that links further into [`StackedRoute`].
        Stacked => "stacked",
    }
}

tagged_enum! {
    /// Destinations reachable from the [`LinkRoute::Stacked`] screen.
    pub enum StackedRoute in "stacked" {
        First => "first",
        Second => "second",
    }
}

tagged_enum! {
    /// Destinations pushed by the root screen's buttons.
    pub enum ButtonRoute in "button" {
        First => "first",
        Second => "second",
    }
}

/// Any destination that can sit on a navigation stack.
///
/// The qualified textual form is `<taxonomy>:<tag>` (`link:stacked`); the
/// `Display` form is the bare tag, which is what change notifications print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Link(LinkRoute),
    Stacked(StackedRoute),
    Button(ButtonRoute),
}

impl Route {
    pub fn taxonomy(self) -> &'static str {
        match self {
            Route::Link(_) => LinkRoute::TAXONOMY,
            Route::Stacked(_) => StackedRoute::TAXONOMY,
            Route::Button(_) => ButtonRoute::TAXONOMY,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Route::Link(route) => route.tag(),
            Route::Stacked(route) => route.tag(),
            Route::Button(route) => route.tag(),
        }
    }

    pub fn qualified(self) -> String {
        format!("{}:{}", self.taxonomy(), self.tag())
    }

    /// Decode a qualified `<taxonomy>:<tag>` string.
    pub fn parse(qualified: &str) -> Result<Self, DecodeError> {
        let Some((taxonomy, tag)) = qualified.split_once(':') else {
            return Err(DecodeError::new("route", qualified));
        };
        if taxonomy == LinkRoute::TAXONOMY {
            LinkRoute::from_tag(tag).map(Route::Link)
        } else if taxonomy == StackedRoute::TAXONOMY {
            StackedRoute::from_tag(tag).map(Route::Stacked)
        } else if taxonomy == ButtonRoute::TAXONOMY {
            ButtonRoute::from_tag(tag).map(Route::Button)
        } else {
            Err(DecodeError::new("route", qualified))
        }
    }

    /// Every known route, taxonomy by taxonomy.
    pub fn all() -> impl Iterator<Item = Route> {
        let links = LinkRoute::ALL.iter().copied().map(Route::Link);
        let stacked = StackedRoute::ALL.iter().copied().map(Route::Stacked);
        let buttons = ButtonRoute::ALL.iter().copied().map(Route::Button);
        links.chain(stacked).chain(buttons)
    }
}

impl From<LinkRoute> for Route {
    fn from(route: LinkRoute) -> Self {
        Route::Link(route)
    }
}

impl From<StackedRoute> for Route {
    fn from(route: StackedRoute) -> Self {
        Route::Stacked(route)
    }
}

impl From<ButtonRoute> for Route {
    fn from(route: ButtonRoute) -> Self {
        Route::Button(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Route {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{}:{}", self.taxonomy(), self.tag()))
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Route::parse(&raw).map_err(de::Error::custom)
    }
}
