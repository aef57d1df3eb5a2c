//! Scroll position tracking ("scroll spy")
//!
//! Maps the page offset to the region under the reading line and remembers
//! which region is highlighted. Applying the result to `NavLink`s is done by
//! the plugin systems.

use crate::types::{ActiveRegionChanged, NavLink, Region, RegionId};

/// Tracks the highlighted region for a page
#[derive(Clone, Debug)]
pub struct NavHighlighter {
    bias: f32,
    active: Option<RegionId>,
}

impl NavHighlighter {
    pub fn new(bias: f32) -> Self {
        Self { bias, active: None }
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f32) {
        self.bias = bias;
    }

    pub fn active(&self) -> Option<&RegionId> {
        self.active.as_ref()
    }

    /// The page coordinate tested against region spans
    pub fn probe(&self, scroll_offset: f32) -> f32 {
        scroll_offset + self.bias
    }

    /// First region whose span contains the probe point
    pub fn match_region<'a>(
        &self,
        scroll_offset: f32,
        regions: impl IntoIterator<Item = &'a Region>,
    ) -> Option<&'a Region> {
        let probe = self.probe(scroll_offset);
        regions.into_iter().find(|region| region.contains(probe))
    }

    /// Recompute the highlighted region.
    ///
    /// Returns the matched region id, or `None` when no region contains the
    /// probe, in which case the previous highlight is kept.
    pub fn update<'a>(
        &mut self,
        scroll_offset: f32,
        regions: impl IntoIterator<Item = &'a Region>,
    ) -> Option<(RegionId, Option<ActiveRegionChanged>)> {
        let id = self.match_region(scroll_offset, regions)?.id.clone();
        let change = self.activate(id.clone());
        Some((id, change))
    }

    /// Force the highlighted region, e.g. after a nav link click
    pub fn activate(&mut self, id: RegionId) -> Option<ActiveRegionChanged> {
        if self.active.as_ref() == Some(&id) {
            return None;
        }
        let previous = self.active.replace(id.clone());
        Some(ActiveRegionChanged { previous, current: id })
    }
}

impl Default for NavHighlighter {
    fn default() -> Self {
        Self::new(100.0)
    }
}

/// Set a link's flag for the highlighted region; returns true if it changed
pub fn apply_highlight(link: &mut NavLink, active_region: &RegionId) -> bool {
    let should_be_active = link.target == *active_region;
    if link.active == should_be_active {
        return false;
    }
    link.active = should_be_active;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<Region> {
        vec![
            Region::new("a", 0.0, 400.0),
            Region::new("b", 400.0, 400.0),
        ]
    }

    #[test]
    fn test_bias_shifts_match() {
        let regions = page();
        let spy = NavHighlighter::new(100.0);

        // 250 + 100 = 350 -> a
        assert_eq!(spy.match_region(250.0, &regions).unwrap().id.as_str(), "a");
        // 350 + 100 = 450 -> b
        assert_eq!(spy.match_region(350.0, &regions).unwrap().id.as_str(), "b");
    }

    #[test]
    fn test_region_span_is_half_open() {
        let regions = page();
        let spy = NavHighlighter::new(0.0);
        assert_eq!(spy.match_region(399.9, &regions).unwrap().id.as_str(), "a");
        assert_eq!(spy.match_region(400.0, &regions).unwrap().id.as_str(), "b");
        assert!(spy.match_region(800.0, &regions).is_none());
    }

    #[test]
    fn test_uneven_regions() {
        let regions = vec![
            Region::new("a", 0.0, 500.0),
            Region::new("b", 500.0, 700.0),
        ];
        let spy = NavHighlighter::new(100.0);
        // 600 + 100 = 700, inside 500..1200
        assert_eq!(spy.match_region(600.0, &regions).unwrap().id.as_str(), "b");
    }

    #[test]
    fn test_update_reports_changes_once() {
        let regions = page();
        let mut spy = NavHighlighter::new(100.0);

        let (id, change) = spy.update(0.0, &regions).unwrap();
        assert_eq!(id.as_str(), "a");
        assert_eq!(
            change,
            Some(ActiveRegionChanged { previous: None, current: "a".into() })
        );

        // Same offset again: no change
        let (_, change) = spy.update(0.0, &regions).unwrap();
        assert!(change.is_none());

        let (_, change) = spy.update(350.0, &regions).unwrap();
        assert_eq!(
            change,
            Some(ActiveRegionChanged { previous: Some("a".into()), current: "b".into() })
        );
    }

    #[test]
    fn test_no_match_keeps_previous_highlight() {
        let regions = page();
        let mut spy = NavHighlighter::new(100.0);
        spy.update(350.0, &regions);

        assert!(spy.update(5000.0, &regions).is_none());
        assert_eq!(spy.active().map(RegionId::as_str), Some("b"));
    }

    #[test]
    fn test_apply_highlight() {
        let active: RegionId = "b".into();
        let mut a = NavLink::new("a");
        let mut b = NavLink::new("b");
        a.active = true;

        assert!(apply_highlight(&mut a, &active));
        assert!(apply_highlight(&mut b, &active));
        assert!(!a.active);
        assert!(b.active);

        // Already in the right state
        assert!(!apply_highlight(&mut a, &active));
        assert!(!apply_highlight(&mut b, &active));
    }
}
