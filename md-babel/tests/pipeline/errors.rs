//! Rejected requests.

use md_babel::{
    convert, ConversionOptions, ConvertError, DialectId, MAX_WRAP_WIDTH, MIN_WRAP_WIDTH,
};

#[test]
fn test_wrap_width_out_of_range() {
    for width in [1, MIN_WRAP_WIDTH - 1, MAX_WRAP_WIDTH + 1] {
        let options = ConversionOptions::new().with_wrap_width(width);
        let err = convert("text", DialectId::Gfm, DialectId::Gfm, &options).unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidWrapWidth {
                width,
                min: MIN_WRAP_WIDTH,
                max: MAX_WRAP_WIDTH
            }
        );
    }
}

#[test]
fn test_zero_width_disables_reflow() {
    let options = ConversionOptions::new().with_wrap_width(0);
    let text = "a paragraph that is comfortably longer than the minimum width";
    assert_eq!(
        convert(text, DialectId::Gfm, DialectId::Gfm, &options).unwrap(),
        text
    );
}

#[test]
fn test_error_messages() {
    let err = ConvertError::InvalidWrapWidth {
        width: 2,
        min: MIN_WRAP_WIDTH,
        max: MAX_WRAP_WIDTH,
    };
    assert_eq!(
        err.to_string(),
        "Wrap width 2 is out of range (expected 0 or 8..=1024)"
    );
    assert_eq!(
        "rst".parse::<DialectId>().unwrap_err().to_string(),
        "Unknown dialect 'rst'"
    );
}

#[test]
fn test_empty_input() {
    for id in DialectId::ALL {
        assert_eq!(
            convert("", id, id, &ConversionOptions::default()).unwrap(),
            ""
        );
    }
}
