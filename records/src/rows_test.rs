use super::*;

fn from_json<T: serde::de::DeserializeOwned>(json: serde_json::Value) -> T {
    serde_json::from_value(json).expect("fixture should deserialize")
}

#[test]
fn exam_projection_defaults_missing_lesson_and_score() {
    let exams: Vec<raw::RawExam> = from_json(serde_json::json!([
        {
            "examId": 1,
            "examTitle": "Midterm Algebra",
            "startTime": "2025-03-01T09:00:00Z",
            "endTime": "2025-03-01T11:00:00Z",
            "Lesson": { "lessonName": "Algebra" },
            "Results": [ { "score": 87 } ]
        },
        {
            "examId": 2,
            "examTitle": "Orphaned Exam",
            "startTime": "2025-03-02T09:00:00Z",
            "endTime": "2025-03-02T11:00:00Z"
        },
        {
            "examId": 3,
            "examTitle": "Essay Final",
            "startTime": "2025-03-03T09:00:00Z",
            "endTime": "2025-03-03T11:00:00Z",
            "Lesson": { "lessonName": "Literature" },
            "Results": []
        }
    ]));

    let rows: Vec<ExamRow> = exams.into_iter().map(project_exam).collect();

    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].lesson_name, "Algebra");
    assert_eq!(rows[0].score, "87");
    assert_eq!(rows[1].id, 2);
    assert_eq!(rows[1].lesson_name, "N/A");
    assert_eq!(rows[1].score, "N/A");
    assert_eq!(rows[2].score, "N/A");
}

#[test]
fn student_projection_joins_name_and_defaults_relations() {
    let student: raw::RawStudent = from_json(serde_json::json!({
        "id": 42,
        "studentId": "S-042",
        "studentName": "Ada",
        "surname": "Lovelace",
        "email": "ada@school.test",
        "img": null,
        "phone": "555-0100",
        "address": "12 Analytical Row"
    }));

    let row = project_student(student);
    assert_eq!(row.id, 42);
    assert_eq!(row.name, "Ada Lovelace");
    assert_eq!(row.photo, DEFAULT_STUDENT_PHOTO);
    assert_eq!(row.grade, "N/A");
    assert_eq!(row.class, "N/A");
}

#[test]
fn student_projection_reads_nested_grade_and_class() {
    let student: raw::RawStudent = from_json(serde_json::json!({
        "id": 7,
        "studentId": "S-007",
        "studentName": "Grace",
        "surname": "Hopper",
        "address": "1 Navy Way",
        "img": "/uploads/grace.png",
        "Grade": { "level": 4 },
        "Class": { "className": "4B" }
    }));

    let row = project_student(student);
    assert_eq!(row.grade, "4");
    assert_eq!(row.class, "4B");
    assert_eq!(row.photo, "/uploads/grace.png");
}

#[test]
fn teacher_projection_flattens_relation_arrays() {
    let teacher: raw::RawTeacher = from_json(serde_json::json!({
        "id": 3,
        "teacherId": "T-003",
        "teacherName": "Alan",
        "surname": "Turing",
        "address": "Bletchley",
        "Subjects": [ { "subjectName": "Math" }, { "subjectName": "Logic" } ],
        "Classes": [ { "className": "5A" } ],
        "Lessons": []
    }));

    let row = project_teacher(teacher);
    assert_eq!(row.subjects, "Math, Logic");
    assert_eq!(row.classes, "5A");
    assert_eq!(row.lessons, "");
    assert_eq!(row.photo, DEFAULT_TEACHER_PHOTO);
}

#[test]
fn class_projection_names_supervisor_or_na() {
    let with: raw::RawClass = from_json(serde_json::json!({
        "classId": 10,
        "className": "1A",
        "capacity": 25,
        "Grade": { "level": 1 },
        "Teacher": { "teacherName": "Marie Curie" }
    }));
    let without: raw::RawClass = from_json(serde_json::json!({
        "classId": 11,
        "className": "1B",
        "capacity": 30
    }));

    assert_eq!(project_class(with).supervisor, "Marie Curie");
    let row = project_class(without);
    assert_eq!(row.supervisor, "N/A");
    assert_eq!(row.grade, "N/A");
    assert_eq!(row.id, 11);
}

#[test]
fn subject_projection_formats_lessons_with_day() {
    let subject: raw::RawSubject = from_json(serde_json::json!({
        "subjectId": 5,
        "subjectName": "Physics",
        "Teacher": { "teacherName": "Lise Meitner" },
        "Lessons": [
            { "lessonName": "Mechanics", "day": "MONDAY" },
            { "lessonName": "Optics", "day": "WEDNESDAY" }
        ]
    }));

    let row = project_subject(subject);
    assert_eq!(row.lessons, "Mechanics (MONDAY), Optics (WEDNESDAY)");
    assert_eq!(row.teachers, "Lise Meitner");
}

#[test]
fn subject_projection_without_lessons_says_so() {
    let subject: raw::RawSubject = from_json(serde_json::json!({
        "subjectId": 6,
        "subjectName": "Chemistry"
    }));

    let row = project_subject(subject);
    assert_eq!(row.lessons, NO_LESSONS_ASSIGNED);
    assert_eq!(row.teachers, "N/A");
}

#[test]
fn result_projection_uses_unknown_for_student_and_zero_for_score() {
    let result: raw::RawResult = from_json(serde_json::json!({ "resultId": 9 }));
    let row = project_result(result);
    assert_eq!(row.student_name, "Unknown");
    assert_eq!(row.exam_title, "N/A");
    assert_eq!(row.assignment_title, "N/A");
    assert_eq!(row.score, "0");
}

#[test]
fn attendance_projection_formats_date_and_presence() {
    let attendance: raw::RawAttendance = from_json(serde_json::json!({
        "attendanceId": 2,
        "date": "2025-02-14T00:00:00Z",
        "present": true,
        "Student": { "studentName": "Ada" },
        "Lesson": { "lessonName": "Algebra" }
    }));

    let row = project_attendance(attendance);
    assert_eq!(row.date, "2025-02-14");
    assert_eq!(row.present, "Yes");

    let absent: raw::RawAttendance = from_json(serde_json::json!({
        "attendanceId": 3,
        "date": "bogus",
        "present": false
    }));
    let row = project_attendance(absent);
    assert_eq!(row.present, "No");
    assert_eq!(row.date, "bogus");
    assert_eq!(row.student_name, "N/A");
    assert_eq!(row.lesson_name, "N/A");
}

#[test]
fn event_projection_splits_start_into_date_and_time() {
    let event: raw::RawEvent = from_json(serde_json::json!({
        "eventId": 4,
        "eventTitle": "Science Fair",
        "startTime": "2025-05-20T10:30:00Z",
        "endTime": "2025-05-20T15:00:00Z"
    }));

    let row = project_event(event);
    assert_eq!(row.date, "2025-05-20");
    assert_eq!(row.start_time, "10:30");
    assert_eq!(row.end_time, "15:00");
    assert_eq!(row.class, "N/A");
}

#[test]
fn announcement_projection_defaults_description() {
    let a: raw::RawAnnouncement = from_json(serde_json::json!({
        "announcementId": 1,
        "announcementTitle": "Snow day",
        "date": "2025-01-05T00:00:00Z"
    }));
    let row = project_announcement(a);
    assert_eq!(row.description, NO_DESCRIPTION);
    assert_eq!(row.date, "2025-01-05");
}

#[test]
fn grade_projection_keeps_nested_students() {
    let grade: raw::RawGrade = from_json(serde_json::json!({
        "gradeId": 8,
        "level": 3,
        "Students": [
            { "studentId": 1, "studentName": "Ada", "email": "ada@s" },
            { "studentId": 2, "studentName": "Alan", "email": "alan@s" }
        ]
    }));

    let row = project_grade(grade);
    assert_eq!(row.level, "3");
    assert_eq!(row.students.len(), 2);
    assert_eq!(row.students[0].student_name, "Ada");

    let empty: raw::RawGrade = from_json(serde_json::json!({ "gradeId": 9, "level": 5 }));
    assert!(project_grade(empty).students.is_empty());
}

#[test]
fn parent_projection_joins_students() {
    let parent: raw::RawParent = from_json(serde_json::json!({
        "id": 21,
        "parentName": "Mary",
        "surname": "Shelley",
        "email": "mary@home",
        "phone": "555-0199",
        "address": "Villa Diodati",
        "Students": [ { "studentName": "Percy" } ]
    }));

    let row = project_parent(parent);
    assert_eq!(row.name, "Mary Shelley");
    assert_eq!(row.students, "Percy");
}

#[test]
fn gender_count_reads_both_buckets_and_tolerates_absence() {
    let rows: Vec<raw::RawSexCount> = from_json(serde_json::json!([
        { "sex": "MALE", "count": 120 },
        { "sex": "FEMALE", "count": 140 }
    ]));
    let count = GenderCount::from_counts(&rows);
    assert_eq!(count, GenderCount { boys: 120, girls: 140 });
    assert!((count.percent(count.boys) - 46.153).abs() < 0.01);

    let empty = GenderCount::from_counts(&[]);
    assert_eq!(empty, GenderCount::default());
    assert!((empty.percent(empty.boys) - 0.0).abs() < f64::EPSILON);
}
