use scraper::{Html, Selector};
use stockdex_rs::core::html::{HtmlError, element_text, select_nth};

#[test]
fn select_nth_counts_in_document_order() {
    let doc = Html::parse_document("<p>zero</p><div><p>one</p></div><p>two</p>");
    let p = Selector::parse("p").unwrap();

    assert_eq!(element_text(select_nth(&doc, &p, "paragraph", 0).unwrap()), "zero");
    assert_eq!(element_text(select_nth(&doc, &p, "paragraph", 2).unwrap()), "two");
}

#[test]
fn select_nth_out_of_range_reports_how_many_were_found() {
    let doc = Html::parse_document("<table></table><table></table>");
    let table = Selector::parse("table").unwrap();

    let err = select_nth(&doc, &table, "table", 2).unwrap_err();
    assert_eq!(
        err,
        HtmlError::OutOfRange {
            what: "table".into(),
            index: 2,
            found: 2
        }
    );
}
