//! Newer palettes. Dark variants here are partial or absent.

use super::{Palette, meta, some};
use crate::color::{ColorOverride, TextOverride};
use crate::theme::{ThemeCategory, ThemeEntry, ThemeId};

pub(super) fn themes() -> Vec<ThemeEntry> {
    vec![
        ThemeEntry {
            id: ThemeId::from("nature-green"),
            metadata: meta(
                "Nature Green",
                ThemeCategory::Nature,
                "leaf",
                "Earthy greens for outdoor and wellness sites",
            ),
            light: Palette {
                primary: "#16A34A",
                secondary: "#15803D",
                background: "#FFFFFF",
                surface: "#F7FEE7",
                text: ["#1C2A1E", "#4D5B4F", "#FFFFFF"],
                border: "#D9E8D0",
                success: "#16A34A",
                warning: "#CA8A04",
                error: "#DC2626",
                shadow: "0 4px 12px rgba(22, 163, 74, 0.15)",
            }
            .build(),
            dark: Some(ColorOverride {
                background: some("#0C1A10"),
                surface: some("#14261A"),
                text: Some(TextOverride {
                    primary: some("#ECFDF5"),
                    secondary: some("#A7C4AE"),
                    accent: None,
                }),
                border: some("#27402F"),
                ..ColorOverride::default()
            }),
        },
        ThemeEntry {
            id: ThemeId::from("ocean-blue"),
            metadata: meta(
                "Ocean Blue",
                ThemeCategory::Nature,
                "waves",
                "Deep sea blues for travel and marine brands",
            ),
            light: Palette {
                primary: "#0284C7",
                secondary: "#0369A1",
                background: "#FFFFFF",
                surface: "#F0F9FF",
                text: ["#0C1E2E", "#475E73", "#FFFFFF"],
                border: "#BAE6FD",
                success: "#059669",
                warning: "#D97706",
                error: "#DC2626",
                shadow: "0 4px 12px rgba(2, 132, 199, 0.15)",
            }
            .build(),
            dark: Some(
                Palette {
                    primary: "#38BDF8",
                    secondary: "#7DD3FC",
                    background: "#082F49",
                    surface: "#0C4A6E",
                    text: ["#F0F9FF", "#BAE6FD", "#082F49"],
                    border: "#075985",
                    success: "#10B981",
                    warning: "#F59E0B",
                    error: "#EF4444",
                    shadow: "0 4px 12px rgba(56, 189, 248, 0.2)",
                }
                .build_override(),
            ),
        },
        ThemeEntry {
            id: ThemeId::from("sunset-orange"),
            metadata: meta(
                "Sunset Orange",
                ThemeCategory::Vibrant,
                "sunset",
                "Warm orange gradient tones for food and events",
            ),
            light: Palette {
                primary: "#EA580C",
                secondary: "#C2410C",
                background: "#FFFFFF",
                surface: "#FFF7ED",
                text: ["#2A1A10", "#6B4F3F", "#FFFFFF"],
                border: "#FED7AA",
                success: "#059669",
                warning: "#D97706",
                error: "#B91C1C",
                shadow: "0 4px 12px rgba(234, 88, 12, 0.15)",
            }
            .build(),
            dark: None,
        },
        ThemeEntry {
            id: ThemeId::from("midnight-purple"),
            metadata: meta(
                "Midnight Purple",
                ThemeCategory::Premium,
                "moon",
                "Dark violet night palette, identical in both modes",
            ),
            light: Palette {
                primary: "#A855F7",
                secondary: "#7E22CE",
                background: "#1E1B2E",
                surface: "#2A2540",
                text: ["#F5F3FF", "#C4B5FD", "#1E1B2E"],
                border: "#3F3A5A",
                success: "#10B981",
                warning: "#F59E0B",
                error: "#EF4444",
                shadow: "0 4px 12px rgba(168, 85, 247, 0.25)",
            }
            .build(),
            dark: None,
        },
        ThemeEntry {
            id: ThemeId::from("rose-pink"),
            metadata: meta(
                "Rose Pink",
                ThemeCategory::Vibrant,
                "flower",
                "Soft rose for beauty and lifestyle pages",
            ),
            light: Palette {
                primary: "#E11D48",
                secondary: "#BE123C",
                background: "#FFFFFF",
                surface: "#FFF1F2",
                text: ["#2B1520", "#6E4B5A", "#FFFFFF"],
                border: "#FECDD3",
                success: "#059669",
                warning: "#D97706",
                error: "#B91C1C",
                shadow: "0 4px 12px rgba(225, 29, 72, 0.15)",
            }
            .build(),
            dark: Some(ColorOverride {
                primary: some("#FB7185"),
                background: some("#1F0F16"),
                surface: some("#2E1720"),
                text: Some(TextOverride {
                    primary: some("#FFE4E6"),
                    ..TextOverride::default()
                }),
                ..ColorOverride::default()
            }),
        },
        ThemeEntry {
            id: ThemeId::from("vibrant-red"),
            metadata: meta(
                "Vibrant Red",
                ThemeCategory::Vibrant,
                "flame",
                "Bold red for sports and entertainment",
            ),
            light: Palette {
                primary: "#DC2626",
                secondary: "#991B1B",
                background: "#FFFFFF",
                surface: "#FEF2F2",
                text: ["#1F1111", "#5F4444", "#FFFFFF"],
                border: "#FECACA",
                success: "#059669",
                warning: "#D97706",
                error: "#7F1D1D",
                shadow: "0 4px 12px rgba(220, 38, 38, 0.15)",
            }
            .build(),
            dark: None,
        },
        ThemeEntry {
            id: ThemeId::from("cool-teal"),
            metadata: meta(
                "Cool Teal",
                ThemeCategory::Tech,
                "droplet",
                "Fresh teal for health and SaaS dashboards",
            ),
            light: Palette {
                primary: "#0D9488",
                secondary: "#0F766E",
                background: "#FFFFFF",
                surface: "#F0FDFA",
                text: ["#102A27", "#4A6360", "#FFFFFF"],
                border: "#CCFBF1",
                success: "#059669",
                warning: "#D97706",
                error: "#DC2626",
                shadow: "0 4px 12px rgba(13, 148, 136, 0.15)",
            }
            .build(),
            dark: Some(ColorOverride {
                primary: some("#2DD4BF"),
                secondary: some("#5EEAD4"),
                background: some("#042F2E"),
                surface: some("#134E4A"),
                text: Some(TextOverride {
                    primary: some("#F0FDFA"),
                    secondary: some("#99F6E4"),
                    accent: some("#042F2E"),
                }),
                border: some("#115E59"),
                shadow: some("0 4px 12px rgba(45, 212, 191, 0.2)"),
                ..ColorOverride::default()
            }),
        },
    ]
}
