use serde::{Deserialize, Serialize};

use crate::text::Text;

/// One property-deed transaction row, as fetched.
///
/// Field names follow the source columns. Everything is optional; the
/// archive's transcription quality varies row by row.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DeedRecord {
	#[serde(default)]
	pub deed_state: Text,
	#[serde(default)]
	pub deed_county: Text,
	#[serde(default)]
	pub deed_date: Text,
	#[serde(default)]
	pub seller_firstname: Text,
	#[serde(default)]
	pub seller_lastname: Text,
	#[serde(default)]
	pub seller_county: Text,
	#[serde(default)]
	pub seller_state: Text,
	#[serde(default)]
	pub seller_administrator_guardian: Text,
	#[serde(default)]
	pub seller_administrator_guardian_firstname: Text,
	#[serde(default)]
	pub seller_administrator_guardian_lastname: Text,
	#[serde(default)]
	pub buyer_firstname: Text,
	#[serde(default)]
	pub buyer_lastname: Text,
	#[serde(default)]
	pub buyer_county: Text,
	#[serde(default)]
	pub buyer_state: Text,
	#[serde(default)]
	pub buyer_amount: Text,
	#[serde(default)]
	pub buyer_purchased_county_district_lot: Text,
	#[serde(default)]
	pub number: Text,
	#[serde(default)]
	pub lotnumber_countysection: Text,
	#[serde(default)]
	pub buyerpurchased_acres: Text,
	#[serde(default)]
	pub deed_link: Text,
	#[serde(default, alias = "Notes")]
	pub notes: Text,
}

/// One enslaved-persons transaction-ledger row, as fetched.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LedgerRecord {
	#[serde(default)]
	pub rec_number: Text,
	#[serde(default)]
	pub source_pg: Text,
	#[serde(default)]
	pub source_fr: Text,
	#[serde(default)]
	pub enslaved_name: Text,
	#[serde(default)]
	pub enslaved_transrole: Text,
	#[serde(default)]
	pub enslaved_color: Text,
	#[serde(default)]
	pub enslaved_genagedesc: Text,
	#[serde(default)]
	pub enslaved_age: Text,
	#[serde(default)]
	pub enslaved_decage: Text,
	#[serde(default)]
	pub enslaved_est_birth: Text,
	#[serde(default)]
	pub enslaved_est_death: Text,
	#[serde(default)]
	pub enslaved_occ: Text,
	#[serde(default)]
	pub enslaved_health: Text,
	#[serde(default)]
	pub enslaved_unkchild: Text,
	#[serde(default)]
	pub enslaved_famno: Text,
	#[serde(default)]
	pub enslaved_famrel: Text,
	#[serde(default)]
	pub enslaver_business: Text,
	#[serde(default)]
	pub enslaver_businessrole: Text,
	#[serde(default)]
	pub enslaver_businessloc: Text,
	#[serde(default)]
	pub enslaver1_name: Text,
	#[serde(default)]
	pub enslaver1_trans_role: Text,
	#[serde(default)]
	pub enslaver1_loc: Text,
	#[serde(default)]
	pub enslaver2_name: Text,
	#[serde(default)]
	pub enslaver2_trans_role: Text,
	#[serde(default)]
	pub enslaver2_loc: Text,
	#[serde(default)]
	pub enslaver3_name: Text,
	#[serde(default)]
	pub enslaver3_trans_role: Text,
	#[serde(default)]
	pub enslaver3_loc: Text,
	#[serde(default)]
	pub enslaver4_name: Text,
	#[serde(default)]
	pub enslaver4_trans_role: Text,
	#[serde(default)]
	pub enslaver4_loc: Text,
	#[serde(default)]
	pub enslaver5_name: Text,
	#[serde(default)]
	pub enslaver5_trans_role: Text,
	#[serde(default)]
	pub enslaver5_loc: Text,
	#[serde(default)]
	pub enslaver6_name: Text,
	#[serde(default)]
	pub enslaver6_trans_role: Text,
	#[serde(default)]
	pub enslaver6_loc: Text,
	#[serde(default)]
	pub enslaver7_name: Text,
	#[serde(default)]
	pub enslaver7_trans_role: Text,
	#[serde(default)]
	pub enslaver7_loc: Text,
	#[serde(default)]
	pub trans_id: Text,
	#[serde(default)]
	pub trans_loc: Text,
	#[serde(default)]
	pub trans_type: Text,
	#[serde(default)]
	pub trans_record_date: Text,
	#[serde(default)]
	pub trans_begin_date: Text,
	#[serde(default)]
	pub trans_end_date: Text,
	#[serde(default)]
	pub transindv_value: Text,
	#[serde(default)]
	pub transgrp_value: Text,
	#[serde(default)]
	pub source_author: Text,
	#[serde(default)]
	pub source_title: Text,
	#[serde(default)]
	pub source_loc: Text,
	#[serde(default)]
	pub source_film_no: Text,
	#[serde(default)]
	pub url: Text,
	#[serde(default)]
	pub extractor: Text,
	#[serde(default)]
	pub url_1: Text,
	#[serde(default)]
	pub notes: Text,
}

impl DeedRecord {
	/// Present string values, in declaration order. Used by the
	/// all-columns deep search.
	pub fn text_fields(&self) -> impl Iterator<Item = &str> {
		[
			self.deed_state.as_deref(),
			self.deed_county.as_deref(),
			self.deed_date.as_deref(),
			self.seller_firstname.as_deref(),
			self.seller_lastname.as_deref(),
			self.seller_county.as_deref(),
			self.seller_state.as_deref(),
			self.seller_administrator_guardian.as_deref(),
			self.seller_administrator_guardian_firstname.as_deref(),
			self.seller_administrator_guardian_lastname.as_deref(),
			self.buyer_firstname.as_deref(),
			self.buyer_lastname.as_deref(),
			self.buyer_county.as_deref(),
			self.buyer_state.as_deref(),
			self.buyer_amount.as_deref(),
			self.buyer_purchased_county_district_lot.as_deref(),
			self.number.as_deref(),
			self.lotnumber_countysection.as_deref(),
			self.buyerpurchased_acres.as_deref(),
			self.deed_link.as_deref(),
			self.notes.as_deref(),
		]
		.into_iter()
		.flatten()
	}
}

impl LedgerRecord {
	pub fn text_fields(&self) -> impl Iterator<Item = &str> {
		[
			self.rec_number.as_deref(),
			self.source_pg.as_deref(),
			self.source_fr.as_deref(),
			self.enslaved_name.as_deref(),
			self.enslaved_transrole.as_deref(),
			self.enslaved_color.as_deref(),
			self.enslaved_genagedesc.as_deref(),
			self.enslaved_age.as_deref(),
			self.enslaved_decage.as_deref(),
			self.enslaved_est_birth.as_deref(),
			self.enslaved_est_death.as_deref(),
			self.enslaved_occ.as_deref(),
			self.enslaved_health.as_deref(),
			self.enslaved_unkchild.as_deref(),
			self.enslaved_famno.as_deref(),
			self.enslaved_famrel.as_deref(),
			self.enslaver_business.as_deref(),
			self.enslaver_businessrole.as_deref(),
			self.enslaver_businessloc.as_deref(),
			self.enslaver1_name.as_deref(),
			self.enslaver1_trans_role.as_deref(),
			self.enslaver1_loc.as_deref(),
			self.enslaver2_name.as_deref(),
			self.enslaver2_trans_role.as_deref(),
			self.enslaver2_loc.as_deref(),
			self.enslaver3_name.as_deref(),
			self.enslaver3_trans_role.as_deref(),
			self.enslaver3_loc.as_deref(),
			self.enslaver4_name.as_deref(),
			self.enslaver4_trans_role.as_deref(),
			self.enslaver4_loc.as_deref(),
			self.enslaver5_name.as_deref(),
			self.enslaver5_trans_role.as_deref(),
			self.enslaver5_loc.as_deref(),
			self.enslaver6_name.as_deref(),
			self.enslaver6_trans_role.as_deref(),
			self.enslaver6_loc.as_deref(),
			self.enslaver7_name.as_deref(),
			self.enslaver7_trans_role.as_deref(),
			self.enslaver7_loc.as_deref(),
			self.trans_id.as_deref(),
			self.trans_loc.as_deref(),
			self.trans_type.as_deref(),
			self.trans_record_date.as_deref(),
			self.trans_begin_date.as_deref(),
			self.trans_end_date.as_deref(),
			self.transindv_value.as_deref(),
			self.transgrp_value.as_deref(),
			self.source_author.as_deref(),
			self.source_title.as_deref(),
			self.source_loc.as_deref(),
			self.source_film_no.as_deref(),
			self.url.as_deref(),
			self.extractor.as_deref(),
			self.url_1.as_deref(),
			self.notes.as_deref(),
		]
		.into_iter()
		.flatten()
	}
}
