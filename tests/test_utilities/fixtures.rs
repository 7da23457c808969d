/// AIDA64-style report pages used across the test suites
use encoding_rs::WINDOWS_1251;
use std::fs;
use std::path::Path;

/// Renders a report page with a summary table, an installed-programs
/// section and a users section.
pub fn report_page(machine: &str, os: &str, programs: &[(&str, &str)], users: &[&str]) -> String {
    let mut page = String::from("<HTML><HEAD><TITLE>Отчет AIDA64</TITLE></HEAD><BODY>\n");

    page.push_str("<TABLE>\n");
    page.push_str("<TR><TD>Версия AIDA64<TD>6.88.6400\n");
    page.push_str(&format!(
        "<TR><TD>Компьютер<TD>{}<TD>Генератор отчета<TD>Администратор\n",
        machine
    ));
    page.push_str(&format!(
        "<TR><TD>Операционная система<TD>{}<TD>Дата<TD>2024-03-18\n",
        os
    ));
    page.push_str("</TABLE>\n");

    page.push_str("<A NAME=\"installed programs\"></A>\n<TABLE>\n");
    page.push_str("<TR><TD><TD><TD>Программа<TD>Версия<TD>Размер\n");
    page.push_str("<TR><TD COLSPAN=2><TD>Установленные программы<TD><TD>\n");
    for (name, version) in programs {
        page.push_str(&format!("<TR><TD><TD><TD>{}<TD>{}<TD>1 MB\n", name, version));
    }
    page.push_str("</TABLE>\n");

    page.push_str("<TABLE><TR><TD><A NAME=\"users\"></A>Пользователи</TD></TR></TABLE>\n");
    page.push_str("<TABLE>\n");
    for user in users {
        page.push_str(&format!("<TR><TD CLASS=dt>[ {} ]</TD></TR>\n", user));
        page.push_str("<TR><TD>Отключен<TD>Нет</TD></TR>\n");
    }
    page.push_str("</TABLE>\n</BODY></HTML>\n");
    page
}

/// Writes `text` to `path` encoded as Windows-1251, creating parents.
pub fn write_report(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let (bytes, _, had_errors) = WINDOWS_1251.encode(text);
    assert!(!had_errors, "fixture text must be representable in Windows-1251");
    fs::write(path, bytes).unwrap();
}
