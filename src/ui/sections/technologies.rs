// SPDX-License-Identifier: MPL-2.0
//! Technology chips, one centered row per content row.

use super::titled;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Row, Text};
use iced::Element;

pub fn view<'a, M: 'a>(i18n: &I18n, rows: &'a [Vec<String>]) -> Element<'a, M> {
    let column = rows
        .iter()
        .filter(|row| !row.is_empty())
        .fold(
            Column::new().spacing(spacing::SM).align_x(Horizontal::Center),
            |column, row| {
                column.push(row.iter().fold(Row::new().spacing(spacing::SM), |line, name| {
                    line.push(
                        Container::new(Text::new(name.clone()).size(typography::BODY))
                            .padding([spacing::XS, spacing::MD])
                            .style(styles::container::chip),
                    )
                }))
            },
        );

    titled(i18n.tr("section-technologies"), column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;

    #[test]
    fn chips_render_embedded_rows() {
        let i18n = I18n::default();
        let portfolio = Portfolio::embedded().expect("embedded content");
        assert!(!portfolio.technologies.is_empty());
        let _element: Element<'_, ()> = view(&i18n, &portfolio.technologies);
    }

    #[test]
    fn empty_rows_are_skipped() {
        let i18n = I18n::default();
        let rows = vec![Vec::new(), vec!["PostgreSQL".to_string()]];
        let _element: Element<'_, ()> = view(&i18n, &rows);
    }
}
