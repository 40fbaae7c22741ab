//! Centralized style constants for consistent theming across Bloom components.
//!
//! Values trace back to the design-token table (Figma "Design System"
//! collection): indigo-600 (#4f46e5) is the primary brand color, neutral-900
//! (#171717) the primary text color, and #f6f9fc the page background.

// Page and card backgrounds with dark mode support
pub const PAGE_BG: &str = "bg-[#f6f9fc] dark:bg-[#0a0a0a]";
pub const CARD_BG: &str = "bg-white dark:bg-[#171717]";
pub const SIDEBAR_BG: &str = "bg-white dark:bg-[#141414]";
pub const SECONDARY_BG: &str = "bg-neutral-100 dark:bg-neutral-800";

// Text colors with dark mode support
pub const PRIMARY_TEXT: &str = "text-[#171717] dark:text-[#fafafa]";
pub const SECONDARY_TEXT: &str = "text-[#666666] dark:text-[#a3a3a3]";
pub const MUTED_TEXT: &str = "text-neutral-400 dark:text-neutral-500";
pub const LINK_TEXT: &str = "text-indigo-600 dark:text-indigo-400";

// Status colors
pub const ERROR_TEXT: &str = "text-red-600 dark:text-red-400";
pub const ERROR_BG: &str = "bg-red-50 dark:bg-red-900/30";
pub const ERROR_BORDER: &str = "border-red-200 dark:border-red-700";
pub const SUCCESS_TEXT: &str = "text-green-600 dark:text-green-400";
pub const SUCCESS_BG: &str = "bg-green-50 dark:bg-green-900/30";

// Borders
pub const PRIMARY_BORDER: &str = "border-[#e5e5e5] dark:border-[#262626]";
pub const FOCUS_BORDER: &str = "focus:border-indigo-600 dark:focus:border-indigo-400";

// Buttons
pub const PRIMARY_BUTTON: &str = "bg-indigo-600 hover:bg-indigo-700 active:bg-indigo-800 text-white rounded-xl font-medium transition-colors disabled:bg-neutral-200 disabled:text-neutral-400 disabled:cursor-not-allowed";
pub const SECONDARY_BUTTON: &str = "bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-800 dark:hover:bg-neutral-700 text-[#171717] dark:text-[#fafafa] rounded-xl font-medium transition-colors";
pub const DANGER_BUTTON: &str = "bg-red-600 hover:bg-red-700 text-white rounded-xl font-medium transition-colors disabled:bg-neutral-200 disabled:text-neutral-400 disabled:cursor-not-allowed";

// Inputs
pub const INPUT_BASE: &str = "w-full px-4 py-3 border rounded-xl text-base focus:outline-none transition-colors";
pub const INPUT_DEFAULT: &str = "border-[#e5e5e5] dark:border-[#262626] bg-white dark:bg-[#171717] text-[#171717] dark:text-[#fafafa] placeholder-neutral-400";
pub const INPUT_ERROR: &str = "border-red-600 bg-red-50 dark:bg-red-900/20 text-[#171717] dark:text-[#fafafa]";
pub const INPUT_SUCCESS: &str = "border-green-600 bg-green-50 dark:bg-green-900/20 text-[#171717] dark:text-[#fafafa]";

// Tiles (goal selection)
pub const TILE_BASE: &str = "flex flex-col items-center justify-center gap-2 px-3 py-5 min-h-[100px] rounded-xl cursor-pointer transition-all";
pub const TILE_IDLE: &str = "bg-white dark:bg-[#171717] border border-[#e5e5e5] dark:border-[#262626] hover:border-blue-200 hover:bg-blue-50 dark:hover:bg-neutral-800";
pub const TILE_SELECTED: &str = "bg-[#eef0ff] dark:bg-indigo-950 border-2 border-indigo-600";

// Modal
pub const MODAL_OVERLAY: &str = "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4";
pub const MODAL_CARD: &str = "bg-white dark:bg-[#171717] rounded-2xl shadow-2xl p-6 max-w-md w-full";

// Layout helpers
pub const FLEX_COL: &str = "flex flex-col";
pub const FLEX_COL_GAP_4: &str = "flex flex-col gap-4";
pub const FLEX_CENTER: &str = "flex items-center";
pub const FLEX_CENTER_GAP_2: &str = "flex items-center gap-2";
pub const FLEX_BETWEEN: &str = "flex justify-between items-center";

// Shadows and corners
pub const CARD_SHADOW: &str = "shadow-[0px_4px_12px_0px_rgba(0,0,0,0.15)]";
pub const ROUNDED_CARD: &str = "rounded-2xl";

// Transitions
pub const TRANSITION_COLORS: &str = "transition-colors duration-200";

/// Fixed habit color palette. First entry is the default for new habits.
pub const HABIT_PALETTE: &[&str] = &[
    "#4f46e5", "#16a34a", "#d97706", "#dc2626", "#2563eb", "#9333ea",
];
