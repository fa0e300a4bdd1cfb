mod detailed_analysis_test;
mod symptom_record_test;
