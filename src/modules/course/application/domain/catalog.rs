use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

// Flat rows as loaded from storage.

#[derive(Debug, Clone, PartialEq)]
pub struct CourseRecord {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurriculumRecord {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

// Nested shape returned to clients.

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: Uuid,
    pub curriculum_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumTree {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub videos: Vec<VideoItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseTree {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub curriculums: Vec<CurriculumTree>,
}

impl CourseTree {
    pub fn video_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.curriculums
            .iter()
            .flat_map(|c| c.videos.iter().map(|v| v.id))
    }

    pub fn video_count(&self) -> usize {
        self.curriculums.iter().map(|c| c.videos.len()).sum()
    }
}

/// Nests curriculums and videos under their courses.
///
/// The relative order of each input slice is kept, so callers that load rows
/// in creation order get trees in creation order. Curriculums or videos whose
/// parent is not among the inputs are dropped. A course listed twice appears
/// once.
pub fn assemble_course_trees(
    courses: Vec<CourseRecord>,
    curriculums: Vec<CurriculumRecord>,
    videos: Vec<VideoItem>,
) -> Vec<CourseTree> {
    let mut videos_by_curriculum: HashMap<Uuid, Vec<VideoItem>> = HashMap::new();
    for video in videos {
        videos_by_curriculum
            .entry(video.curriculum_id)
            .or_default()
            .push(video);
    }

    let mut curriculums_by_course: HashMap<Uuid, Vec<CurriculumTree>> = HashMap::new();
    for curriculum in curriculums {
        let videos = videos_by_curriculum
            .remove(&curriculum.id)
            .unwrap_or_default();
        curriculums_by_course
            .entry(curriculum.course_id)
            .or_default()
            .push(CurriculumTree {
                id: curriculum.id,
                course_id: curriculum.course_id,
                title: curriculum.title,
                description: curriculum.description,
                videos,
            });
    }

    let mut seen = HashSet::new();
    courses
        .into_iter()
        .filter(|course| seen.insert(course.id))
        .map(|course| CourseTree {
            curriculums: curriculums_by_course
                .remove(&course.id)
                .unwrap_or_default(),
            id: course.id,
            title: course.title,
            description: course.description,
            thumbnail_url: course.thumbnail_url,
            created_at: course.created_at,
        })
        .collect()
}
