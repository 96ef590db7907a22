use std::collections::HashMap;

use crate::core::scoring::covers;
use crate::models::{CandidateProfile, JobPosting, SkillGap};

/// Required skills the candidate lacks, ranked by how many postings ask for them
///
/// Skills are grouped case-insensitively and reported with the first spelling
/// seen. A posting listing the same skill twice counts once. Ties are broken
/// by skill name.
pub fn skill_gaps(profile: &CandidateProfile, postings: &[JobPosting]) -> Vec<SkillGap> {
    let mut gaps: Vec<SkillGap> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for posting in postings {
        let mut seen_in_posting: Vec<String> = Vec::new();

        for skill in &posting.skills {
            let key = skill.trim().to_lowercase();
            if key.is_empty() || seen_in_posting.contains(&key) {
                continue;
            }
            seen_in_posting.push(key.clone());

            if covers(&profile.skills, skill) {
                continue;
            }

            match index.get(&key) {
                Some(&i) => gaps[i].demand += 1,
                None => {
                    index.insert(key, gaps.len());
                    gaps.push(SkillGap {
                        skill: skill.trim().to_string(),
                        demand: 1,
                    });
                }
            }
        }
    }

    gaps.sort_by(|a, b| b.demand.cmp(&a.demand).then_with(|| a.skill.cmp(&b.skill)));
    gaps
}
