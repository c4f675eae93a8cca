//! Summary writers.

use std::io::Write;

use sales_core::ProductSummary;

use crate::config::{OutputSettings, RecordFormat};
use crate::error::ReportResult;

/// Writes summaries to `writer` as configured.
///
/// JSON output is a single array followed by a newline. CSV output has the
/// header `product,total,quantity,average_price`.
pub fn write_summaries<W: Write>(
    mut writer: W,
    summaries: &[ProductSummary],
    settings: &OutputSettings,
) -> ReportResult<()> {
    match settings.format {
        RecordFormat::Json => {
            if settings.pretty {
                serde_json::to_writer_pretty(&mut writer, summaries)?;
            } else {
                serde_json::to_writer(&mut writer, summaries)?;
            }
            writeln!(writer)?;
        }
        RecordFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut writer);
            for summary in summaries {
                wtr.serialize(summary)?;
            }
            wtr.flush()?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::{Numeric, ProductKey};

    fn summaries() -> Vec<ProductSummary> {
        vec![
            ProductSummary::from_totals(ProductKey::from("A"), Numeric::Int(30), Numeric::Int(3)),
            ProductSummary::from_totals(ProductKey::from("B"), Numeric::Int(45), Numeric::Int(3)),
        ]
    }

    fn render(settings: &OutputSettings) -> String {
        let mut buf: Vec<u8> = Vec::new();
        write_summaries(&mut buf, &summaries(), settings).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_json() {
        let out = render(&OutputSettings::default());
        assert_eq!(
            out,
            "[{\"product\":\"A\",\"total\":30,\"quantity\":3,\"average_price\":10.0},\
             {\"product\":\"B\",\"total\":45,\"quantity\":3,\"average_price\":15.0}]\n"
        );
    }

    #[test]
    fn test_write_pretty_json() {
        let out = render(&OutputSettings {
            format: RecordFormat::Json,
            pretty: true,
        });
        assert!(out.starts_with("[\n  {\n    \"product\": \"A\","));
    }

    #[test]
    fn test_write_csv() {
        let out = render(&OutputSettings {
            format: RecordFormat::Csv,
            pretty: false,
        });
        assert_eq!(
            out,
            "product,total,quantity,average_price\nA,30,3,10.0\nB,45,3,15.0\n"
        );
    }
}
