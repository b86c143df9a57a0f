//! Static seed datasets.
//!
//! Each collection is built once on first use and shared as `Arc<[T]>`.

use super::{Account, AccountStatus, Member, MemberStatus, User};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::sync::Arc;

static USERS: Lazy<Arc<[User]>> = Lazy::new(|| {
    vec![
        User::new(1, "田中 太郎", "tanaka@example.com", "管理者", date(2024, 1, 15)),
        User::new(2, "佐藤 花子", "sato@example.com", "ユーザー", date(2024, 2, 20)),
        User::new(3, "鈴木 一郎", "suzuki@example.com", "ユーザー", date(2024, 3, 10)),
        User::new(4, "高橋 美咲", "takahashi@example.com", "編集者", date(2024, 4, 5)),
        User::new(5, "渡辺 健太", "watanabe@example.com", "ユーザー", date(2024, 5, 12)),
        User::new(6, "伊藤 由美", "ito@example.com", "管理者", date(2024, 6, 18)),
        User::new(7, "山本 大輔", "yamamoto@example.com", "ユーザー", date(2024, 7, 22)),
        User::new(8, "中村 愛", "nakamura@example.com", "編集者", date(2024, 8, 30)),
    ]
    .into()
});

static MEMBERS: Lazy<Arc<[Member]>> = Lazy::new(|| {
    use MemberStatus::*;
    vec![
        Member::new("Ava Larson", "Product Manager", "ava.larson@example.com", Active),
        Member::new("Diego Ramos", "Staff Engineer", "diego.ramos@example.com", Active),
        Member::new("Mei Tan", "Design Lead", "mei.tan@example.com", Onboarding),
        Member::new("Samir Khan", "Data Analyst", "samir.khan@example.com", Active),
        Member::new("Claire Dupont", "Customer Success", "claire.dupont@example.com", OutOfOffice),
        Member::new("Noah Fischer", "QA Engineer", "noah.fischer@example.com", Onboarding),
        Member::new("Lena Schultz", "Data Engineer", "lena.schultz@example.com", Active),
        Member::new("Marcus Lee", "Security Lead", "marcus.lee@example.com", Active),
        Member::new("Priya Desai", "Marketing Manager", "priya.desai@example.com", Onboarding),
        Member::new("Ethan Clark", "Support Engineer", "ethan.clark@example.com", OutOfOffice),
        Member::new("Julia Romano", "Ops Manager", "julia.romano@example.com", Active),
        Member::new("Aria Patel", "Mobile Engineer", "aria.patel@example.com", Onboarding),
        Member::new("Leo Martins", "Solutions Architect", "leo.martins@example.com", Active),
        Member::new("Sofia Nguyen", "Growth PM", "sofia.nguyen@example.com", Active),
        Member::new("Harper Young", "Content Strategist", "harper.young@example.com", OutOfOffice),
        Member::new("Omar Haddad", "Frontend Engineer", "omar.haddad@example.com", Active),
        Member::new("Rina Sato", "Researcher", "rina.sato@example.com", Onboarding),
        Member::new("Victor Chen", "Platform Engineer", "victor.chen@example.com", Active),
        Member::new("Isla Brooks", "People Ops", "isla.brooks@example.com", Active),
        Member::new("Hugo Silva", "Sales Lead", "hugo.silva@example.com", OutOfOffice),
        Member::new("Nina Ivanova", "Data Scientist", "nina.ivanova@example.com", Active),
        Member::new("Zane Cooper", "Backend Engineer", "zane.cooper@example.com", Onboarding),
        Member::new("Ivy Johnson", "Finance Manager", "ivy.johnson@example.com", Active),
        Member::new("Caleb Wright", "Support Specialist", "caleb.wright@example.com", Active),
    ]
    .into()
});

static ACCOUNTS: Lazy<Arc<[Account]>> = Lazy::new(|| {
    use AccountStatus::*;
    vec![
        Account::new(1, "山田太郎", "yamada@example.com", "管理者", Active),
        Account::new(2, "佐藤花子", "sato@example.com", "ユーザー", Active),
        Account::new(3, "鈴木一郎", "suzuki@example.com", "ユーザー", Inactive),
        Account::new(4, "田中美咲", "tanaka@example.com", "モデレーター", Active),
        Account::new(5, "高橋健", "takahashi@example.com", "ユーザー", Active),
        Account::new(6, "伊藤裕子", "ito@example.com", "ユーザー", Active),
        Account::new(7, "渡辺誠", "watanabe@example.com", "ユーザー", Inactive),
        Account::new(8, "山本さくら", "yamamoto@example.com", "モデレーター", Active),
        Account::new(9, "中村大輔", "nakamura@example.com", "ユーザー", Active),
        Account::new(10, "小林真理", "kobayashi@example.com", "ユーザー", Active),
        Account::new(11, "加藤翔太", "kato@example.com", "ユーザー", Inactive),
        Account::new(12, "吉田優香", "yoshida@example.com", "ユーザー", Active),
        Account::new(13, "山口隆", "yamaguchi@example.com", "モデレーター", Active),
        Account::new(14, "松本千尋", "matsumoto@example.com", "ユーザー", Active),
        Account::new(15, "井上悠斗", "inoue@example.com", "ユーザー", Active),
        Account::new(16, "木村愛", "kimura@example.com", "ユーザー", Inactive),
        Account::new(17, "林大樹", "hayashi@example.com", "ユーザー", Active),
        Account::new(18, "斎藤美月", "saito@example.com", "モデレーター", Active),
        Account::new(19, "清水陽介", "shimizu@example.com", "ユーザー", Active),
        Account::new(20, "山崎結衣", "yamazaki@example.com", "ユーザー", Active),
        Account::new(21, "森本拓海", "morimoto@example.com", "ユーザー", Inactive),
        Account::new(22, "池田彩華", "ikeda@example.com", "ユーザー", Active),
        Account::new(23, "橋本健吾", "hashimoto@example.com", "ユーザー", Active),
        Account::new(24, "石川優衣", "ishikawa@example.com", "モデレーター", Active),
        Account::new(25, "前田涼太", "maeda@example.com", "ユーザー", Active),
        Account::new(26, "藤田美優", "fujita@example.com", "ユーザー", Inactive),
        Account::new(27, "岡田颯", "okada@example.com", "ユーザー", Active),
        Account::new(28, "後藤葵", "goto@example.com", "ユーザー", Active),
        Account::new(29, "長谷川蓮", "hasegawa@example.com", "ユーザー", Active),
        Account::new(30, "村上陽菜", "murakami@example.com", "ユーザー", Inactive),
    ]
    .into()
});

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Directory users with registration dates (8 rows).
pub fn users() -> Arc<[User]> {
    USERS.clone()
}

/// Team members (24 rows).
pub fn members() -> Arc<[Member]> {
    MEMBERS.clone()
}

/// Accounts for the paginated users listing (30 rows).
pub fn accounts() -> Arc<[Account]> {
    ACCOUNTS.clone()
}
