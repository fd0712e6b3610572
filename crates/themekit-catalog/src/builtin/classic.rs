//! The first six palettes. Every one has a complete dark variant.

use super::{Palette, meta};
use crate::theme::{ThemeCategory, ThemeEntry, ThemeId};

pub(super) fn themes() -> Vec<ThemeEntry> {
    vec![
        ThemeEntry {
            id: ThemeId::from("professional-blue"),
            metadata: meta(
                "Professional Blue",
                ThemeCategory::Professional,
                "briefcase",
                "Trustworthy blue for business and consulting sites",
            ),
            light: Palette {
                primary: "#2563EB",
                secondary: "#1E40AF",
                background: "#FFFFFF",
                surface: "#F0F7FF",
                text: ["#1E293B", "#475569", "#FFFFFF"],
                border: "#CBD5E1",
                success: "#059669",
                warning: "#D97706",
                error: "#DC2626",
                shadow: "0 4px 12px rgba(37, 99, 235, 0.15)",
            }
            .build(),
            dark: Some(
                Palette {
                    primary: "#3B82F6",
                    secondary: "#60A5FA",
                    background: "#0F172A",
                    surface: "#1E293B",
                    text: ["#F1F5F9", "#CBD5E1", "#FFFFFF"],
                    border: "#334155",
                    success: "#10B981",
                    warning: "#F59E0B",
                    error: "#EF4444",
                    shadow: "0 4px 12px rgba(59, 130, 246, 0.2)",
                }
                .build_override(),
            ),
        },
        ThemeEntry {
            id: ThemeId::from("corporate-green"),
            metadata: meta(
                "Corporate Green",
                ThemeCategory::Professional,
                "building-2",
                "Calm green for finance and sustainability brands",
            ),
            light: Palette {
                primary: "#059669",
                secondary: "#047857",
                background: "#FFFFFF",
                surface: "#F0FDF4",
                text: ["#1F2937", "#4B5563", "#FFFFFF"],
                border: "#D1D5DB",
                success: "#059669",
                warning: "#D97706",
                error: "#DC2626",
                shadow: "0 4px 12px rgba(5, 150, 105, 0.15)",
            }
            .build(),
            dark: Some(
                Palette {
                    primary: "#10B981",
                    secondary: "#34D399",
                    background: "#0F172A",
                    surface: "#1E293B",
                    text: ["#F1F5F9", "#CBD5E1", "#FFFFFF"],
                    border: "#334155",
                    success: "#10B981",
                    warning: "#F59E0B",
                    error: "#EF4444",
                    shadow: "0 4px 12px rgba(16, 185, 129, 0.2)",
                }
                .build_override(),
            ),
        },
        ThemeEntry {
            id: ThemeId::from("premium-purple"),
            metadata: meta(
                "Premium Purple",
                ThemeCategory::Premium,
                "crown",
                "Rich purple for creative and premium products",
            ),
            light: Palette {
                primary: "#7C3AED",
                secondary: "#6D28D9",
                background: "#FFFFFF",
                surface: "#FAF5FF",
                text: ["#1F2937", "#4B5563", "#FFFFFF"],
                border: "#E5E7EB",
                success: "#059669",
                warning: "#D97706",
                error: "#DC2626",
                shadow: "0 4px 12px rgba(124, 58, 237, 0.15)",
            }
            .build(),
            dark: Some(
                Palette {
                    primary: "#8B5CF6",
                    secondary: "#A78BFA",
                    background: "#0F172A",
                    surface: "#1E293B",
                    text: ["#F1F5F9", "#CBD5E1", "#FFFFFF"],
                    border: "#334155",
                    success: "#10B981",
                    warning: "#F59E0B",
                    error: "#EF4444",
                    shadow: "0 4px 12px rgba(139, 92, 246, 0.2)",
                }
                .build_override(),
            ),
        },
        ThemeEntry {
            id: ThemeId::from("luxury-gold"),
            metadata: meta(
                "Luxury Gold",
                ThemeCategory::Premium,
                "gem",
                "Gold accents on charcoal for high-end showcases",
            ),
            light: Palette {
                primary: "#D97706",
                secondary: "#B45309",
                background: "#1F2937",
                surface: "#374151",
                text: ["#F9FAFB", "#E5E7EB", "#1F2937"],
                border: "#4B5563",
                success: "#10B981",
                warning: "#F59E0B",
                error: "#EF4444",
                shadow: "0 4px 12px rgba(217, 119, 6, 0.2)",
            }
            .build(),
            dark: Some(
                Palette {
                    primary: "#F59E0B",
                    secondary: "#FBBF24",
                    background: "#111827",
                    surface: "#1F2937",
                    text: ["#F9FAFB", "#E5E7EB", "#111827"],
                    border: "#374151",
                    success: "#10B981",
                    warning: "#F59E0B",
                    error: "#EF4444",
                    shadow: "0 4px 12px rgba(245, 158, 11, 0.2)",
                }
                .build_override(),
            ),
        },
        ThemeEntry {
            id: ThemeId::from("minimal-gray"),
            metadata: meta(
                "Minimal Gray",
                ThemeCategory::Minimal,
                "circle",
                "Quiet neutrals that keep the focus on content",
            ),
            light: Palette {
                primary: "#4B5563",
                secondary: "#374151",
                background: "#FFFFFF",
                surface: "#F9FAFB",
                text: ["#111827", "#6B7280", "#FFFFFF"],
                border: "#E5E7EB",
                success: "#10B981",
                warning: "#F59E0B",
                error: "#EF4444",
                shadow: "0 2px 8px rgba(0, 0, 0, 0.08)",
            }
            .build(),
            dark: Some(
                Palette {
                    primary: "#9CA3AF",
                    secondary: "#D1D5DB",
                    background: "#111827",
                    surface: "#1F2937",
                    text: ["#F9FAFB", "#E5E7EB", "#FFFFFF"],
                    border: "#374151",
                    success: "#10B981",
                    warning: "#F59E0B",
                    error: "#EF4444",
                    shadow: "0 2px 8px rgba(0, 0, 0, 0.3)",
                }
                .build_override(),
            ),
        },
        ThemeEntry {
            id: ThemeId::from("tech-cyan"),
            metadata: meta(
                "Tech Cyan",
                ThemeCategory::Tech,
                "cpu",
                "Electric cyan on slate for developer tools",
            ),
            light: Palette {
                primary: "#06B6D4",
                secondary: "#0891B2",
                background: "#0F172A",
                surface: "#1E293B",
                text: ["#F1F5F9", "#CBD5E1", "#0F172A"],
                border: "#334155",
                success: "#10B981",
                warning: "#F59E0B",
                error: "#EF4444",
                shadow: "0 4px 12px rgba(6, 182, 212, 0.2)",
            }
            .build(),
            dark: Some(
                Palette {
                    primary: "#22D3EE",
                    secondary: "#67E8F9",
                    background: "#020617",
                    surface: "#0F172A",
                    text: ["#F8FAFC", "#E2E8F0", "#020617"],
                    border: "#1E293B",
                    success: "#10B981",
                    warning: "#F59E0B",
                    error: "#EF4444",
                    shadow: "0 4px 12px rgba(34, 211, 238, 0.2)",
                }
                .build_override(),
            ),
        },
    ]
}
