//! Text rendering for the main screen and notices.

use std::io::{self, Write};

use crate::domain::{Department, DepartmentList, Notice};

const HEADERS: [&str; 6] = [
    "ID",
    "School ID",
    "Dept Code",
    "Department Name",
    "Location",
    "Email",
];

/// Write the snapshot as a table.
///
/// Each row starts with two marker columns: `>` for the selected row and
/// `*` for the highlighted one.
pub fn department_table<W: Write>(out: &mut W, list: &DepartmentList) -> io::Result<()> {
    let rows: Vec<[String; 6]> = list.departments().iter().map(cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "Departments ({})", rows.len())?;
    write_row(out, "   ", &HEADERS, &widths)?;
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    writeln!(out, "   {}", rule.join("-+-"))?;

    for (index, (department, row)) in list.departments().iter().zip(&rows).enumerate() {
        let selected = if list.selected() == Some(index) { '>' } else { ' ' };
        let highlighted = if list.is_highlighted(department) { '*' } else { ' ' };
        write_row(out, &format!("{selected}{highlighted} "), row, &widths)?;
    }
    Ok(())
}

/// Write a notice with its severity.
pub fn notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    writeln!(out, "[{}] {}", notice.severity().label(), notice.message())
}

fn cells(department: &Department) -> [String; 6] {
    [
        department.id().to_string(),
        department.school_id().to_string(),
        department.dept_code().to_string(),
        department.name().to_owned(),
        department.location().unwrap_or_default().to_owned(),
        department.email().unwrap_or_default().to_owned(),
    ]
}

fn write_row<W: Write, S: AsRef<str>>(
    out: &mut W,
    prefix: &str,
    cells: &[S],
    widths: &[usize],
) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .collect();
    let line = format!("{prefix}{}", padded.join(" | "));
    writeln!(out, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::MockDepartmentRepository;
    use crate::domain::{DepartmentDraft, DepartmentId};
    use rstest::rstest;

    fn department(
        id: i32,
        school_id: i32,
        code: i32,
        name: &str,
        location: &str,
        email: &str,
    ) -> Department {
        Department::new(
            DepartmentId::new(id),
            DepartmentDraft::new(school_id, code, name, location, email),
        )
    }

    #[rstest]
    fn table_marks_selected_and_highlighted_rows() {
        let rows = vec![
            department(1, 10, 100, "Computing", "Bldg A", "cs@x.edu"),
            department(2, 10, 200, "Maths", "", ""),
            department(4, 20, 400, "Physics", "Lab 3", ""),
        ];
        let mut repo = MockDepartmentRepository::new();
        repo.expect_list().return_once(move || Ok(rows));
        let mut list = DepartmentList::load(Arc::new(repo)).expect("loads");
        list.search_by_id(DepartmentId::new(4)).expect("found");

        let mut out = Vec::new();
        department_table(&mut out, &list).expect("rendered");
        let rendered = String::from_utf8(out).expect("utf-8");

        insta::assert_snapshot!(rendered, @r"
Departments (3)
   ID | School ID | Dept Code | Department Name | Location | Email
   ---+-----------+-----------+-----------------+----------+---------
   1  | 10        | 100       | Computing       | Bldg A   | cs@x.edu
   2  | 10        | 200       | Maths           |          |
>* 4  | 20        | 400       | Physics         | Lab 3    |
");
    }

    #[rstest]
    fn notices_carry_severity() {
        let mut out = Vec::new();
        notice(&mut out, &Notice::warning("Name is required")).expect("rendered");
        assert_eq!(
            String::from_utf8(out).expect("utf-8"),
            "[warning] Name is required\n"
        );
    }
}
