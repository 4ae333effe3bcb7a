//! メニューフィルタのセレクタ判定
//!
//! フィルタコントロールの `data-filter` 属性値を解釈し、
//! メニュー項目のclass集合に対する可視判定を行う。

/// フィルタセレクタ
///
/// - `"*"`（または属性なし） → `All`: 全件表示
/// - `".filter-food"` のようなclassセレクタ → `Category("filter-food")`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelector {
    All,
    Category(String),
}

impl FilterSelector {
    /// `data-filter` 属性値からセレクタを作る
    ///
    /// 遷移関数を全域にするため、空文字や `"."` だけの値もAll扱いにする
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == "*" {
            return Self::All;
        }
        let tag = raw.trim_start_matches('.');
        if tag.is_empty() {
            Self::All
        } else {
            Self::Category(tag.to_string())
        }
    }

    /// 要素のclass属性（空白区切り）に対する可視判定
    pub fn matches(&self, class_attr: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => class_attr.split_whitespace().any(|c| c == tag),
        }
    }

    /// CSSセレクタ表現（グリッドライブラリへ渡す形式）
    pub fn css_selector(&self) -> String {
        match self {
            Self::All => "*".to_string(),
            Self::Category(tag) => format!(".{}", tag),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // parse
    // =============================================

    #[test]
    fn test_parse_wildcard() {
        assert_eq!(FilterSelector::parse("*"), FilterSelector::All);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            FilterSelector::parse(".filter-food"),
            FilterSelector::Category("filter-food".to_string())
        );
    }

    #[test]
    fn test_parse_without_leading_dot() {
        assert_eq!(
            FilterSelector::parse("filter-drinks"),
            FilterSelector::Category("filter-drinks".to_string())
        );
    }

    #[test]
    fn test_parse_empty_is_all() {
        assert_eq!(FilterSelector::parse(""), FilterSelector::All);
        assert_eq!(FilterSelector::parse("  "), FilterSelector::All);
        assert_eq!(FilterSelector::parse("."), FilterSelector::All);
    }

    // =============================================
    // matches
    // =============================================

    #[test]
    fn test_all_matches_everything() {
        let selector = FilterSelector::All;
        assert!(selector.matches("menu-item filter-food"));
        assert!(selector.matches("menu-item"));
        assert!(selector.matches(""));
    }

    #[test]
    fn test_category_matches_tagged_item() {
        let selector = FilterSelector::parse(".filter-food");
        assert!(selector.matches("menu-item filter-food"));
        assert!(selector.matches("filter-food"));
    }

    #[test]
    fn test_category_rejects_untagged_item() {
        let selector = FilterSelector::parse(".filter-food");
        assert!(!selector.matches("menu-item filter-drinks"));
        assert!(!selector.matches("menu-item"));
        assert!(!selector.matches(""));
    }

    #[test]
    fn test_category_requires_whole_class() {
        // 部分一致では可視にしない
        let selector = FilterSelector::parse(".filter-food");
        assert!(!selector.matches("menu-item filter-foods"));
        assert!(!selector.matches("menu-item my-filter-food"));
    }

    #[test]
    fn test_matches_ignores_animation_classes() {
        // 表示時に付与されるクラスが混ざっていても判定は変わらない
        let selector = FilterSelector::parse(".filter-services");
        assert!(selector.matches("menu-item filter-services animated fadeInUp"));
        assert!(!selector.matches("menu-item filter-food animated fadeInUp"));
    }

    // =============================================
    // css_selector
    // =============================================

    #[test]
    fn test_css_selector_roundtrip() {
        assert_eq!(FilterSelector::All.css_selector(), "*");
        assert_eq!(
            FilterSelector::parse(".filter-food").css_selector(),
            ".filter-food"
        );
    }

    #[test]
    fn test_is_all() {
        assert!(FilterSelector::All.is_all());
        assert!(!FilterSelector::parse(".filter-food").is_all());
    }
}
