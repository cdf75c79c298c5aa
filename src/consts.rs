//! Fixed class names and strings shared by the state machines and bindings.

// ── Classes ─────────────────────────────────────────────────────

/// Marks the visible section, the highlighted nav control and open overlays.
pub const ACTIVE_CLASS: &str = "active";

/// Exit animation applied to the section being left.
pub const SECTION_EXIT_CLASS: &str = "section-exit";

/// Enter animation applied to the section being shown.
pub const SECTION_ENTER_CLASS: &str = "section-enter";

/// Root of a lightbox overlay instance.
pub const LIGHTBOX_OVERLAY_CLASS: &str = "image-modal-overlay";

// ── Data attributes ─────────────────────────────────────────────

/// Set on trigger elements that carry a direct listener, so the delegated
/// document listener leaves them alone.
pub const BOUND_ATTR: &str = "data-modal-bound";

/// Set on images whose source was already swapped for the placeholder.
pub const FALLBACK_ATTR: &str = "data-fallback";

// ── Embedded JSON ───────────────────────────────────────────────

/// `<script type="application/json">` holding page overrides for `SiteConfig`.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

/// `<script type="application/json">` replacing the built-in project catalog.
pub const CATALOG_SCRIPT_ID: &str = "project-catalog";

// ── Focus ───────────────────────────────────────────────────────

/// Descendants of the dialog that take part in the Tab cycle.
pub const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), textarea:not([disabled]), \
     input:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex='-1'])";

// ── Assets ──────────────────────────────────────────────────────

/// Placeholder shown when an image path is empty or fails to load.
///
/// Inline so the fallback itself can never fail to load.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;charset=utf-8,\
%3Csvg xmlns='http://www.w3.org/2000/svg' width='400' height='300' viewBox='0 0 400 300'%3E\
%3Crect width='400' height='300' fill='%231a1a2e'/%3E\
%3Ctext x='200' y='155' fill='%239933ff' font-family='sans-serif' font-size='18' text-anchor='middle'%3E\
Image unavailable%3C/text%3E%3C/svg%3E";
