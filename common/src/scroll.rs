//! スクロール位置の判定ロジック

/// ヘッダー/トップバー/back-to-topが切り替わる閾値（px）
pub const HEADER_SCROLLED_THRESHOLD: f64 = 100.0;

/// スクロールスパイの先読みオフセット（px）
pub const SCROLLSPY_OFFSET: f64 = 200.0;

/// ヘッダーを「スクロール済み」表示にするか
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_THRESHOLD
}

/// back-to-topボタンを表示するか（ヘッダーと同じ閾値）
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_THRESHOLD
}

/// セクションが現在のスクロール位置でアクティブか
///
/// 判定位置はオフセット分だけ先読みし、セクション範囲の両端を含む
pub fn section_active(scroll_y: f64, section_top: f64, section_height: f64) -> bool {
    let position = scroll_y + SCROLLSPY_OFFSET;
    position >= section_top && position <= section_top + section_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_scrolled_threshold() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(100.5));
        assert!(header_scrolled(1200.0));
    }

    #[test]
    fn test_back_to_top_same_threshold() {
        assert!(!back_to_top_visible(100.0));
        assert!(back_to_top_visible(101.0));
    }

    #[test]
    fn test_section_active_inside_range() {
        // scroll_y=300 → position=500、セクション[400, 900]
        assert!(section_active(300.0, 400.0, 500.0));
    }

    #[test]
    fn test_section_active_range_is_inclusive() {
        // position == section_top
        assert!(section_active(200.0, 400.0, 500.0));
        // position == section_top + height
        assert!(section_active(700.0, 400.0, 500.0));
    }

    #[test]
    fn test_section_inactive_outside_range() {
        assert!(!section_active(100.0, 400.0, 500.0));
        assert!(!section_active(701.0, 400.0, 500.0));
    }

    #[test]
    fn test_section_active_zero_height() {
        assert!(section_active(200.0, 400.0, 0.0));
        assert!(!section_active(199.0, 400.0, 0.0));
    }
}
